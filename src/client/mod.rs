pub mod service;
pub mod virustotal;

pub use service::ScanService;
pub use virustotal::VirusTotalClient;
