//! The xrandr apply backend.

use std::process::Command;

use log::{debug, error};

use crate::error::ControlError;
use crate::output::{OutputName, resolve_output};
use crate::settings::ColorSettings;

/// Applies gamma and brightness values to a display output.
///
/// The panel drives one of these on every user-visible change; mock
/// implementations back the tests.
pub trait GammaBackend: Send + Sync {
    /// The output this backend drives.
    fn output(&self) -> &OutputName;

    /// Push the given values to the display.
    fn apply(&self, settings: &ColorSettings) -> Result<(), ControlError>;
}

/// Backend driving a real display through the `xrandr` command.
pub struct XrandrBackend {
    output: OutputName,
}

impl XrandrBackend {
    /// Resolve the connected output and build a backend for it.
    ///
    /// # Errors
    ///
    /// - [`ControlError::NoDisplayFound`] if no output reports as connected
    /// - [`ControlError::Io`] if the xrandr listing cannot be spawned
    pub fn new() -> Result<Self, ControlError> {
        Ok(Self {
            output: resolve_output()?,
        })
    }

    /// Build a backend for an already-known output.
    pub fn for_output(output: OutputName) -> Self {
        Self { output }
    }
}

impl GammaBackend for XrandrBackend {
    fn output(&self) -> &OutputName {
        &self.output
    }

    fn apply(&self, settings: &ColorSettings) -> Result<(), ControlError> {
        let brightness = settings.brightness_argument();
        let gamma = settings.gamma_argument();
        debug!(
            "xrandr --output {} --brightness {brightness} --gamma {gamma}",
            self.output
        );

        // Argument vector, never a shell string.
        let result = Command::new("xrandr")
            .arg("--output")
            .arg(self.output.as_str())
            .arg("--brightness")
            .arg(&brightness)
            .arg("--gamma")
            .arg(&gamma)
            .output()?;

        if !result.status.success() {
            let status = result.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            error!("xrandr exited with status {status}: {stderr}");
            return Err(ControlError::XrandrFailed { status, stderr });
        }

        Ok(())
    }
}
