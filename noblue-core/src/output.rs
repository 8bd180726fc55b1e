//! Connected-output resolution via the xrandr listing.

use std::fmt;
use std::process::Command;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::ControlError;

/// Name of a display output as reported by the X server, e.g. `eDP-1`.
///
/// Resolved once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName(String);

impl OutputName {
    /// Wrap a raw output name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name, as passed to `xrandr --output`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The leading token must be space-delimited, so "disconnected" lines
// never match.
static CONNECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+) connected").expect("connected-output pattern"));

/// Pick the first output the listing text reports as connected.
pub(crate) fn parse_connected_output(listing: &str) -> Option<OutputName> {
    CONNECTED
        .captures(listing)
        .map(|captures| OutputName(captures[1].to_string()))
}

/// Query xrandr for the currently connected output.
///
/// Runs `xrandr` with no arguments and scans its stdout. There is no
/// retry; a failure here is terminal for the session.
///
/// # Errors
///
/// - [`ControlError::Io`] if xrandr cannot be spawned
/// - [`ControlError::NoDisplayFound`] if no output reports as connected
pub fn resolve_output() -> Result<OutputName, ControlError> {
    let listing = Command::new("xrandr").output()?;
    let stdout = String::from_utf8_lossy(&listing.stdout);

    let name = parse_connected_output(&stdout).ok_or(ControlError::NoDisplayFound)?;
    debug!("resolved connected output: {name}");
    Ok(name)
}
