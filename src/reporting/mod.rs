//! Console presentation of scan reports.

pub mod tier;
pub mod formatter;
pub mod table;
pub mod renderer;

pub use renderer::{render_outcome, QUEUED_NOTICE};
pub use tier::ColorTier;
