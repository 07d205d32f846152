#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/elizalabs/eliza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod renderer;
pub mod scatter;
pub mod summary;

pub use renderer::{ConsoleRenderer, NoOpRenderer, RenderError, ResultsRenderer, to_json};
pub use scatter::render_scatter;
pub use summary::{RiskPanel, TextSummary};
