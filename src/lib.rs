//! Submit a file to the VirusTotal v2 API, fetch the analysis report once,
//! and render per-vendor detection results for the console.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod reporting;
