// Core error taxonomy
// Service-layer failures use anyhow with context instead; these variants
// cover conditions the view layer reports and recovers from locally.

use thiserror::Error;

/// Errors raised by view-state and render operations.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// An unrecognized view name was supplied. The previous view state
    /// is retained by the caller.
    #[error("Unknown view granularity: {0}")]
    InvalidGranularity(String),

    /// A render was requested while no render sink is attached. The
    /// render is skipped; nothing else is affected.
    #[error("No render target attached ({0})")]
    MissingRenderTarget(&'static str),
}
