//! Build demo: writes JSON/HTML fixtures into a dist directory

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildInfo {
    build_time: DateTime<Utc>,
    version: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppManifest {
    version: &'static str,
    build_time: DateTime<Utc>,
    features: [&'static str; 4],
}

const APP_FEATURES: [&str; 4] = [
    "Environment-aware configuration",
    "Secure secret management",
    "Deployment gating",
    "Multi-stage pipeline",
];

/// Simulate a build: create `dist/` under `out_dir` and write the fixtures
///
/// The base build writes `build-info.json`; `environment_aware` additionally
/// writes the versioned `app.json` manifest and a static `index.html` page.
/// Returns the dist directory path.
pub fn run(out_dir: &Path, environment_aware: bool) -> Result<PathBuf> {
    println!("Starting build process...");

    let dist = out_dir.join("dist");
    fs::create_dir_all(&dist)?;

    let now = Utc::now();
    let info = BuildInfo {
        build_time: now,
        version: "1.0.0",
        status: "success",
    };
    fs::write(
        dist.join("build-info.json"),
        serde_json::to_string_pretty(&info)?,
    )?;

    if environment_aware {
        let manifest = AppManifest {
            version: "2.0.0",
            build_time: now,
            features: APP_FEATURES,
        };
        fs::write(dist.join("app.json"), serde_json::to_string_pretty(&manifest)?)?;
        fs::write(dist.join("index.html"), render_index(&manifest))?;
    }

    println!("✓ Build completed successfully!");
    println!("  Output: {}", dist.display());

    let mut names: Vec<String> = fs::read_dir(&dist)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    println!("  Files: {}", names.join(", "));

    Ok(dist)
}

fn render_index(manifest: &AppManifest) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Environment Demo App</title>
</head>
<body>
  <h1>GitHub Actions Environment Demo</h1>
  <p>Version: {}</p>
  <p>Built: {}</p>
</body>
</html>
"#,
        manifest.version,
        manifest.build_time.to_rfc3339()
    )
}
