//! The settings panel state.
//!
//! Owns the canonical channel values and the entry-box texts. The slider
//! and entry views of a channel are only ever updated through here, so
//! they cannot drift apart.

use crate::backend::GammaBackend;
use crate::error::ControlError;
use crate::kelvin::{Preset, kelvin_to_gamma};
use crate::settings::{CHANNEL_MAX, CHANNEL_MIN, Channel, ColorSettings, entry_text};

/// Canonical channel values plus the four entry-box texts.
pub struct SettingsPanel {
    settings: ColorSettings,
    entries: [String; 4],
}

impl SettingsPanel {
    /// A panel holding the launch defaults, entries formatted to match.
    pub fn new() -> Self {
        let settings = ColorSettings::launch_defaults();
        let entries = Channel::ALL.map(|channel| entry_text(settings.get(channel)));
        Self { settings, entries }
    }

    /// The current channel values.
    pub fn settings(&self) -> &ColorSettings {
        &self.settings
    }

    /// The current value of one channel, as the slider shows it.
    pub fn value(&self, channel: Channel) -> f64 {
        self.settings.get(channel)
    }

    /// The current text of one channel's entry box.
    pub fn entry_text(&self, channel: Channel) -> &str {
        &self.entries[channel.index()]
    }

    fn render_entry(&mut self, channel: Channel) {
        self.entries[channel.index()] = entry_text(self.settings.get(channel));
    }

    fn render_all_entries(&mut self) {
        for channel in Channel::ALL {
            self.render_entry(channel);
        }
    }

    /// Store raw entry text as the user types it. No value change, no apply.
    pub fn edit_entry(&mut self, channel: Channel, text: String) {
        self.entries[channel.index()] = text;
    }

    /// A slider moved: store the value, reformat that channel's entry to
    /// two decimals, apply immediately. Every movement applies; there is
    /// no debounce.
    pub fn slider_changed(
        &mut self,
        channel: Channel,
        value: f64,
        backend: &dyn GammaBackend,
    ) -> Result<(), ControlError> {
        self.settings.set(channel, value);
        self.render_entry(channel);
        backend.apply(&self.settings)
    }

    /// An entry box was confirmed: parse its text, store the value and
    /// apply all four channels.
    ///
    /// The parsed value is stored verbatim, even outside the slider range;
    /// the slider widget clamps only its own rendering.
    ///
    /// # Errors
    ///
    /// [`ControlError::InvalidNumber`] if the text does not parse; the
    /// values and the typed text are left unchanged and nothing is applied.
    pub fn entry_confirmed(
        &mut self,
        channel: Channel,
        backend: &dyn GammaBackend,
    ) -> Result<(), ControlError> {
        let text = self.entries[channel.index()].trim();
        let value: f64 = text.parse().map_err(|_| ControlError::InvalidNumber {
            input: text.to_string(),
        })?;

        self.settings.set(channel, value);
        self.render_entry(channel);
        backend.apply(&self.settings)
    }

    /// Reset all four channels to neutral and apply once.
    pub fn revert(&mut self, backend: &dyn GammaBackend) -> Result<(), ControlError> {
        self.settings = ColorSettings::reset_defaults();
        self.render_all_entries();
        backend.apply(&self.settings)
    }

    /// Set the three gamma channels from a temperature preset and apply
    /// once. Brightness is left untouched.
    pub fn set_preset(
        &mut self,
        preset: Preset,
        backend: &dyn GammaBackend,
    ) -> Result<(), ControlError> {
        let (red, green, blue) = kelvin_to_gamma(preset.kelvin());
        self.settings.red = red.clamp(CHANNEL_MIN, CHANNEL_MAX);
        self.settings.green = green.clamp(CHANNEL_MIN, CHANNEL_MAX);
        self.settings.blue = blue.clamp(CHANNEL_MIN, CHANNEL_MAX);
        self.render_all_entries();
        backend.apply(&self.settings)
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}
