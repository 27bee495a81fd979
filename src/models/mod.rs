pub mod submission;
pub mod report;

pub use submission::*;
pub use report::*;
