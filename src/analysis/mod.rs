pub mod metrics;
pub mod report;

pub use metrics::*;
pub use report::*;
