//! Result renderers.
//!
//! The engine computes; an implementation of [`ResultsRenderer`] decides how
//! results reach the user. The no-op variant keeps everything testable
//! without I/O.

use crate::scatter::render_scatter;
use crate::summary::{RiskPanel, TextSummary};
use eliza_model::CapmAnalysis;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Destination for analysis results.
pub trait ResultsRenderer {
    /// Render a CAPM analysis.
    fn capm(&mut self, analysis: &CapmAnalysis) -> Result<(), RenderError>;

    /// Render a dollar risk panel.
    fn risk(&mut self, panel: &RiskPanel) -> Result<(), RenderError>;
}

/// Renders results as ASCII tables to any writer.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Create a renderer over an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleRenderer<io::Stdout> {
    /// Create a renderer over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ResultsRenderer for ConsoleRenderer<W> {
    fn capm(&mut self, analysis: &CapmAnalysis) -> Result<(), RenderError> {
        self.writer.write_all(analysis.to_ascii_table().as_bytes())?;
        if let Some(plot) = &analysis.plot {
            self.writer.write_all(render_scatter(plot).as_bytes())?;
        }
        Ok(())
    }

    fn risk(&mut self, panel: &RiskPanel) -> Result<(), RenderError> {
        self.writer.write_all(panel.to_ascii_table().as_bytes())?;
        Ok(())
    }
}

/// Discards all results.
#[derive(Debug, Default)]
pub struct NoOpRenderer;

impl ResultsRenderer for NoOpRenderer {
    fn capm(&mut self, _analysis: &CapmAnalysis) -> Result<(), RenderError> {
        Ok(())
    }

    fn risk(&mut self, _panel: &RiskPanel) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Serialize any reportable result as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(value)?)
}
