use thiserror::Error;

/// Errors produced by the statistics core itself, as opposed to the file
/// I/O shim (see [`crate::input::InputError`]).
#[derive(Debug, Error)]
pub enum StatsError {
    /// The input as a whole cannot be interpreted as GHIN data. Fatal to
    /// the run; individual malformed entries are recovered locally and
    /// never raise this.
    #[error("invalid GHIN data: {0}")]
    DataFormat(String),

    /// The aggregate result could not be rendered as a structured
    /// document. Unreachable under the engine's contract; if it fires, it
    /// is a defect and propagates rather than being swallowed.
    #[error("unrenderable report shape: {0}")]
    InputShape(String),
}
