//! Example: resolve the connected output and apply the launch defaults.
//!
//! Run with: `cargo run --example apply_defaults`

use noblue_core::{ColorSettings, ControlError, GammaBackend, XrandrBackend};

fn main() -> Result<(), ControlError> {
    // Initialize logging (optional)
    env_logger::init();

    // Resolve the connected output
    let backend = XrandrBackend::new()?;
    println!("Connected output: {}", backend.output());

    // Apply the warm launch defaults
    let settings = ColorSettings::launch_defaults();
    backend.apply(&settings)?;
    println!(
        "Applied gamma {} at brightness {}",
        settings.gamma_argument(),
        settings.brightness_argument()
    );

    Ok(())
}
