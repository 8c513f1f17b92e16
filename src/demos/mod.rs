//! Simulated CI demo pipelines
//!
//! Each demo prints deterministic status text, optionally writes a fixture
//! file, and succeeds or fails through its returned `Result`. Nothing here
//! schedules jobs, deploys anywhere, or talks to a registry; the point is
//! the observable transcript an orchestrating workflow would see.

pub mod build;
pub mod checks;
pub mod consumer;
pub mod deploy;
pub mod matrix;
pub mod runner;
