use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

/// Ask for a yes/no confirmation. Anything but an explicit yes declines.
pub fn confirm() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Please confirm")
        .default(false)
        .interact()
        .wrap_err("Failed to read confirmation")
}
