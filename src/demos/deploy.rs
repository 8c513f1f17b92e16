//! Deployment simulation for the environments demo
//!
//! Target environment and API endpoint come from process environment
//! variables the way a gated workflow environment would inject them. The
//! step delay is purely decorative pacing; ordering is step order.

use std::time::Duration;
use tokio::time::sleep;

const STEPS: [&str; 5] = [
    "Connecting to server",
    "Uploading files",
    "Updating configuration",
    "Restarting services",
    "Running health checks",
];

const STEP_DELAY: Duration = Duration::from_millis(100);

pub async fn run(no_delay: bool) {
    let environment =
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    println!("Deploying to {environment}...");
    println!("API URL: {api_url}");

    for (index, step) in STEPS.iter().enumerate() {
        if !no_delay {
            sleep(STEP_DELAY).await;
        }
        println!("  [{}/{}] {}...", index + 1, STEPS.len(), step);
    }

    println!("\n✓ Deployment completed successfully!");
}
