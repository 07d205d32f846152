#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/elizalabs/eliza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod audit;
pub mod engine;

// Re-export main types from sub-crates
pub use eliza_data as data;
pub use eliza_model as model;
pub use eliza_output as output;

pub use audit::{FetchAudit, FetchHistory, NoOpAudit};
pub use engine::{Eliza, ElizaError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
