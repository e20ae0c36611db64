use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by either demo.
#[derive(Debug, Error)]
pub enum Error {
    /// The expression handed to the plotter could not be compiled.
    ///
    /// `position` is the offset the evaluator reported for the failure, or the
    /// end of the input when the evaluator only knows that something is missing.
    #[error("error compiling expression at position {position}: {message}")]
    Compile { position: usize, message: String },

    /// The native window or its rendering context could not be created.
    #[error("display error: {0}")]
    Display(#[from] eframe::Error),
}
