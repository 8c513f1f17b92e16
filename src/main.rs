use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, error};

use actions_lab::demos;
use actions_lab::env::RealActionEnv;
use actions_lab::greeting;

/// Local workbench for GitHub Actions concepts
#[derive(Parser)]
#[command(name = "actions-lab")]
#[command(about = "Run the greeting action and simulated CI demo pipelines", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the greeting action and publish its outputs
    Greet {
        /// Display name to greet (falls back to the INPUT_WHO_TO_GREET variable)
        #[arg(long)]
        who_to_greet: Option<String>,

        /// Greeting style: formal, enthusiastic or casual (unrecognized values mean casual)
        #[arg(long)]
        greeting_style: Option<String>,
    },
    /// Run one of the simulated CI demo pipelines
    Demo {
        #[command(subcommand)]
        command: DemoCommands,
    },
}

#[derive(Subcommand)]
enum DemoCommands {
    /// Matrix-build demo: fixed test cases plus runtime identification
    MatrixTest {
        /// Flip one expectation to exercise the failing exit path
        #[arg(long, hide = true)]
        fail: bool,
    },
    /// Build demo: write JSON/HTML fixtures into a dist directory
    Build {
        /// Directory to create dist/ under (default: current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Also write the environment-aware app manifest and HTML page
        #[arg(long)]
        environment_aware: bool,
    },
    /// Lint demo: print the fixed code-quality checks
    Lint,
    /// Test demo: print the fixed reusable-workflow test results
    Test,
    /// Deployment simulation driven by ENVIRONMENT and API_URL
    Deploy {
        /// Skip the decorative delay between steps
        #[arg(long)]
        no_delay: bool,
    },
    /// Dynamic test-runner demo: suite selection by job name
    TestRunner {
        /// Job name; "Integration" or "E2E" substrings select those suites
        #[arg(default_value = "Unknown Test")]
        name: String,

        /// Runtime label for the header
        #[arg(default_value = "unknown")]
        runtime: String,

        /// Runtime version for the header
        #[arg(default_value = "unknown")]
        version: String,
    },
    /// Exercise the bundled sample package
    PackageTest,
    /// Print the simulated consumer-app transcript
    Consumer,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("actions-lab started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Greet {
            who_to_greet,
            greeting_style,
        } => run_greet(who_to_greet, greeting_style),
        Commands::Demo { command } => run_demo_command(command).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_greet(who_to_greet: Option<String>, greeting_style: Option<String>) -> anyhow::Result<()> {
    let mut overrides = HashMap::new();
    if let Some(name) = who_to_greet {
        overrides.insert(greeting::INPUT_WHO_TO_GREET.to_string(), name);
    }
    if let Some(style) = greeting_style {
        overrides.insert(greeting::INPUT_GREETING_STYLE.to_string(), style);
    }

    let env = RealActionEnv::with_overrides(overrides);
    greeting::run(&env)?;
    Ok(())
}

async fn run_demo_command(command: DemoCommands) -> anyhow::Result<()> {
    match command {
        DemoCommands::MatrixTest { fail } => demos::matrix::run(fail)?,
        DemoCommands::Build {
            out_dir,
            environment_aware,
        } => {
            let out_dir = match out_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            demos::build::run(&out_dir, environment_aware)?;
        }
        DemoCommands::Lint => demos::checks::lint(),
        DemoCommands::Test => demos::checks::test(),
        DemoCommands::Deploy { no_delay } => demos::deploy::run(no_delay).await,
        DemoCommands::TestRunner {
            name,
            runtime,
            version,
        } => demos::runner::run(&name, &runtime, &version),
        DemoCommands::PackageTest => demos::consumer::package_test(),
        DemoCommands::Consumer => demos::consumer::consumer(),
    }

    Ok(())
}
