pub mod orchestrator;

pub use orchestrator::ScanPipeline;
