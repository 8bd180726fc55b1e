//! Error types for display control.

/// Errors that can occur while resolving or driving the display.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// No output reported as connected in the xrandr listing.
    #[error("no connected display found")]
    NoDisplayFound,

    /// An entry box held text that does not parse as a number.
    #[error("not a valid number: {input:?}")]
    InvalidNumber {
        /// The rejected entry text.
        input: String,
    },

    /// xrandr exited with a non-zero status.
    #[error("xrandr exited with status {status}: {stderr}")]
    XrandrFailed {
        /// The exit code, or -1 when terminated by a signal.
        status: i32,
        /// Captured stderr output.
        stderr: String,
    },

    /// Failed to spawn the external command.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
