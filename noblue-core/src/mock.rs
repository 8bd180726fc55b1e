//! Mock backend for testing.

use std::sync::Mutex;

use crate::backend::GammaBackend;
use crate::error::ControlError;
use crate::output::OutputName;
use crate::settings::ColorSettings;

/// A recording display backend for tests.
///
/// Stores every applied snapshot instead of touching a display, so the
/// panel logic can be exercised without an X server.
///
/// # Example
///
/// ```
/// use noblue_core::{ColorSettings, GammaBackend, MockBackend};
///
/// let mock = MockBackend::new();
/// mock.apply(&ColorSettings::reset_defaults()).unwrap();
/// assert_eq!(mock.applied().len(), 1);
/// ```
pub struct MockBackend {
    output: OutputName,
    applied: Mutex<Vec<ColorSettings>>,
}

impl MockBackend {
    /// Create a mock driving a fake output named `MOCK-1`.
    pub fn new() -> Self {
        Self {
            output: OutputName::new("MOCK-1"),
            applied: Mutex::new(Vec::new()),
        }
    }

    /// Snapshots applied so far, oldest first.
    pub fn applied(&self) -> Vec<ColorSettings> {
        self.applied.lock().unwrap().clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GammaBackend for MockBackend {
    fn output(&self) -> &OutputName {
        &self.output
    }

    fn apply(&self, settings: &ColorSettings) -> Result<(), ControlError> {
        self.applied.lock().unwrap().push(*settings);
        Ok(())
    }
}
