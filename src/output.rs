//! # Output Configuration
//!
//! This module controls how `ghm` renders results on the terminal. Colour is
//! only ever used to highlight branch names in `ghm list --branch`; the plain
//! text is identical either way, so scripts can rely on it.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use clap::ValueEnum;
use console::Style;

use crate::repository::{ListingEntry, UNKNOWN_BRANCH};

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    /// Colour when the terminal supports it
    #[default]
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag(ColorChoice::Auto)
    }
}

/// Render one `list` line, highlighting the branch when colors are enabled.
pub fn render_entry(config: &OutputConfig, entry: &ListingEntry) -> String {
    let Some(branch) = &entry.branch else {
        return entry.path.clone();
    };

    if !config.use_color {
        return entry.to_string();
    }

    let style = if branch == UNKNOWN_BRANCH {
        Style::new().yellow()
    } else {
        Style::new().green()
    };
    format!(
        "{} [{}]",
        entry.path,
        style.force_styling(true).apply_to(branch)
    )
}
