//! Gamma and brightness control for X11 displays via xrandr.
//!
//! This crate backs the NoBlue blue-light filter. It resolves the
//! connected display output, models the four adjustable channels (red,
//! green and blue gamma plus global brightness), and pushes values to the
//! display by invoking the `xrandr` command-line tool. The
//! [`SettingsPanel`] keeps the two redundant views of each channel (a
//! numeric entry box and a slider) consistent and applies on every
//! user-driven change.
//!
//! # Requirements
//!
//! - An X11 session with at least one connected output
//! - `xrandr` available on `PATH`
//!
//! # Example
//!
//! ```no_run
//! use noblue_core::{Channel, GammaBackend, SettingsPanel, XrandrBackend};
//!
//! fn main() -> Result<(), noblue_core::ControlError> {
//!     // Resolve the connected output (fails when none is connected)
//!     let backend = XrandrBackend::new()?;
//!     println!("Driving output {}", backend.output());
//!
//!     // Push the warm launch defaults
//!     let mut panel = SettingsPanel::new();
//!     backend.apply(panel.settings())?;
//!
//!     // Warm the screen further
//!     panel.slider_changed(Channel::Blue, 0.6, &backend)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockBackend`] to exercise the panel without a display:
//!
//! ```
//! use noblue_core::{Channel, MockBackend, SettingsPanel};
//!
//! let mock = MockBackend::new();
//! let mut panel = SettingsPanel::new();
//! panel.slider_changed(Channel::Red, 0.5, &mock).unwrap();
//! assert_eq!(mock.applied().len(), 1);
//! ```

#![warn(missing_docs)]

mod backend;
mod error;
mod kelvin;
mod mock;
mod output;
mod panel;
mod settings;

// Re-export public API
pub use backend::{GammaBackend, XrandrBackend};
pub use error::ControlError;
pub use kelvin::{Preset, kelvin_to_gamma};
pub use mock::MockBackend;
pub use output::{OutputName, resolve_output};
pub use panel::SettingsPanel;
pub use settings::{CHANNEL_MAX, CHANNEL_MIN, Channel, ColorSettings, entry_text};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::parse_connected_output;

    const LAPTOP_LISTING: &str = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
   1920x1080     60.01*+  59.97
HDMI-1 disconnected (normal left inverted right x axis y axis)
";

    #[test]
    fn test_resolver_picks_first_connected_output() {
        let name = parse_connected_output(LAPTOP_LISTING).unwrap();
        assert_eq!(name.as_str(), "eDP-1");

        let two_connected = "\
DP-1 connected 2560x1440+0+0 (normal left inverted right x axis y axis) 597mm x 336mm
DP-2 connected 1920x1080+2560+0 (normal left inverted right x axis y axis) 527mm x 296mm
";
        let name = parse_connected_output(two_connected).unwrap();
        assert_eq!(name.as_str(), "DP-1");
    }

    #[test]
    fn test_resolver_ignores_disconnected_outputs() {
        let listing = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
HDMI-1 disconnected (normal left inverted right x axis y axis)
DP-1 disconnected (normal left inverted right x axis y axis)
";
        assert!(parse_connected_output(listing).is_none());
    }

    #[test]
    fn test_launch_defaults_fill_entries() {
        let panel = SettingsPanel::new();

        assert_eq!(panel.value(Channel::Red), 1.0);
        assert_eq!(panel.value(Channel::Green), 0.88);
        assert_eq!(panel.value(Channel::Blue), 0.76);
        assert_eq!(panel.value(Channel::Brightness), 0.70);

        assert_eq!(panel.entry_text(Channel::Red), "1.00");
        assert_eq!(panel.entry_text(Channel::Green), "0.88");
        assert_eq!(panel.entry_text(Channel::Blue), "0.76");
        assert_eq!(panel.entry_text(Channel::Brightness), "0.70");
    }

    #[test]
    fn test_slider_change_formats_entry_and_applies() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        panel.slider_changed(Channel::Red, 0.5, &mock).unwrap();

        assert_eq!(panel.entry_text(Channel::Red), "0.50");
        let applied = mock.applied();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].gamma_argument(), "0.5000:0.8800:0.7600");
        assert_eq!(applied[0].brightness_argument(), "0.7000");
    }

    #[test]
    fn test_slider_values_render_to_two_decimals() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        for value in [0.1, 0.25, 0.33, 0.5, 0.77, 1.0] {
            panel.slider_changed(Channel::Blue, value, &mock).unwrap();
            assert_eq!(panel.entry_text(Channel::Blue), format!("{value:.2}"));
        }
    }

    #[test]
    fn test_entry_confirm_applies_all_channels() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        panel.edit_entry(Channel::Green, "0.5".to_string());
        panel.entry_confirmed(Channel::Green, &mock).unwrap();

        assert_eq!(panel.value(Channel::Green), 0.5);
        assert_eq!(panel.entry_text(Channel::Green), "0.50");

        let applied = mock.applied();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].gamma_argument(), "1.0000:0.5000:0.7600");
        assert_eq!(applied[0].brightness_argument(), "0.7000");
    }

    #[test]
    fn test_entry_confirm_rejects_garbage() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        panel.edit_entry(Channel::Blue, "abc".to_string());
        let err = panel.entry_confirmed(Channel::Blue, &mock).unwrap_err();

        assert!(matches!(err, ControlError::InvalidNumber { .. }));
        assert_eq!(*panel.settings(), ColorSettings::launch_defaults());
        assert_eq!(panel.entry_text(Channel::Blue), "abc");
        assert!(mock.applied().is_empty());
    }

    #[test]
    fn test_entry_value_outside_slider_range_passes_verbatim() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        panel.edit_entry(Channel::Red, "1.50".to_string());
        panel.entry_confirmed(Channel::Red, &mock).unwrap();

        assert_eq!(panel.value(Channel::Red), 1.5);
        assert_eq!(mock.applied()[0].gamma_argument(), "1.5000:0.8800:0.7600");
    }

    #[test]
    fn test_revert_resets_both_views_and_applies_once() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        panel.slider_changed(Channel::Red, 0.5, &mock).unwrap();
        panel.revert(&mock).unwrap();

        assert_eq!(*panel.settings(), ColorSettings::reset_defaults());
        for channel in Channel::ALL {
            assert_eq!(panel.entry_text(channel), "1.00");
        }

        let applied = mock.applied();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[1].gamma_argument(), "1.0000:1.0000:1.0000");
        assert_eq!(applied[1].brightness_argument(), "1.0000");
    }

    #[test]
    fn test_gamma_argument_formats_four_decimals() {
        let settings = ColorSettings::launch_defaults();
        assert_eq!(settings.gamma_argument(), "1.0000:0.8800:0.7600");
        assert_eq!(settings.brightness_argument(), "0.7000");
    }

    #[test]
    fn test_kelvin_daylight_is_near_neutral() {
        let (red, green, blue) = kelvin_to_gamma(6500.0);
        assert_eq!(red, 1.0);
        assert!(green > 0.95 && green <= 1.0);
        assert!(blue > 0.95 && blue <= 1.0);
    }

    #[test]
    fn test_kelvin_warmer_never_raises_green_or_blue() {
        let (r_candle, g_candle, b_candle) = kelvin_to_gamma(2700.0);
        let (r_dusk, g_dusk, b_dusk) = kelvin_to_gamma(4500.0);

        assert_eq!(r_candle, 1.0);
        assert_eq!(r_dusk, 1.0);
        assert!(g_candle < g_dusk);
        assert!(b_candle < b_dusk);
        assert!(b_candle < g_candle);
    }

    #[test]
    fn test_kelvin_clamps_outside_fitted_range() {
        assert_eq!(kelvin_to_gamma(500.0), kelvin_to_gamma(1000.0));
        let (_, green, blue) = kelvin_to_gamma(1000.0);
        assert_eq!(blue, 0.0);
        assert!(green > 0.0);

        let (red, _, blue) = kelvin_to_gamma(10_000.0);
        assert_eq!(blue, 1.0);
        assert!(red < 1.0);
    }

    #[test]
    fn test_preset_changes_gamma_but_not_brightness() {
        let mock = MockBackend::new();
        let mut panel = SettingsPanel::new();

        panel.set_preset(Preset::Candle, &mock).unwrap();

        assert_eq!(panel.value(Channel::Red), 1.0);
        assert_eq!(panel.value(Channel::Brightness), 0.70);
        let green = panel.value(Channel::Green);
        let blue = panel.value(Channel::Blue);
        assert!(green > 0.6 && green < 0.7);
        assert!(blue > 0.3 && blue < 0.4);

        assert_eq!(panel.entry_text(Channel::Red), "1.00");
        assert_eq!(panel.entry_text(Channel::Brightness), "0.70");
        assert_eq!(mock.applied().len(), 1);
    }
}
