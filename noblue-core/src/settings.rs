//! Channel values and their view/wire formatting.

/// Lower bound of every channel slider.
pub const CHANNEL_MIN: f64 = 0.1;

/// Upper bound of every channel slider.
pub const CHANNEL_MAX: f64 = 1.0;

/// One of the four adjustable channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red gamma.
    Red,
    /// Green gamma.
    Green,
    /// Blue gamma.
    Blue,
    /// Global brightness.
    Brightness,
}

impl Channel {
    /// All channels, in the order the panel lays them out.
    pub const ALL: [Channel; 4] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Brightness,
    ];

    /// The label shown above the channel's controls.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red Gamma",
            Channel::Green => "Green Gamma",
            Channel::Blue => "Blue Gamma",
            Channel::Brightness => "Brightness",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Brightness => 3,
        }
    }
}

/// The four gamma/brightness values driving the display.
///
/// A snapshot of these is handed to the backend on every apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSettings {
    /// Red gamma factor.
    pub red: f64,
    /// Green gamma factor.
    pub green: f64,
    /// Blue gamma factor.
    pub blue: f64,
    /// Global brightness factor.
    pub brightness: f64,
}

impl ColorSettings {
    /// The warm values shown when the application starts.
    pub fn launch_defaults() -> Self {
        Self {
            red: 1.0,
            green: 0.88,
            blue: 0.76,
            brightness: 0.70,
        }
    }

    /// The neutral values restored by "Revert to Defaults".
    pub fn reset_defaults() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
            brightness: 1.0,
        }
    }

    /// Read one channel.
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Brightness => self.brightness,
        }
    }

    /// Write one channel.
    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
            Channel::Brightness => self.brightness = value,
        }
    }

    /// The `--gamma` argument: three colon-separated 4-decimal floats.
    pub fn gamma_argument(&self) -> String {
        format!("{:.4}:{:.4}:{:.4}", self.red, self.green, self.blue)
    }

    /// The `--brightness` argument, 4-decimal.
    pub fn brightness_argument(&self) -> String {
        format!("{:.4}", self.brightness)
    }
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self::launch_defaults()
    }
}

/// Format a channel value the way the entry boxes display it.
pub fn entry_text(value: f64) -> String {
    format!("{value:.2}")
}
