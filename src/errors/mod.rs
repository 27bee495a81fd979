pub mod types;
pub mod classification;

pub use types::VtScanError;
pub use classification::ErrorClassification;
