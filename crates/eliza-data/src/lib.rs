#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/elizalabs/eliza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod series;
pub mod source;
pub mod yahoo;

pub use error::{DataError, Result};
pub use series::{PricePoint, PriceSeries};
pub use source::PriceSource;
pub use yahoo::YahooCloseProvider;

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
