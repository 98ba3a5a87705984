//! Light and dark report palettes.
//!
//! The OS appearance is only consulted when output is actually coloured,
//! and at most once per process.

use dark_light::Mode;
use once_cell::sync::OnceCell;

use super::theme::Theme;
use crate::render::OutputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl From<Mode> for ColorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Dark => ColorMode::Dark,
            Mode::Light => ColorMode::Light,
        }
    }
}

/// The terminal's light/dark appearance, detected on first call.
pub fn detect_color_mode() -> ColorMode {
    static DETECTED: OnceCell<ColorMode> = OnceCell::new();
    *DETECTED.get_or_init(|| {
        let mode = ColorMode::from(dark_light::detect());
        tracing::debug!(?mode, "detected terminal color mode");
        mode
    })
}

/// A light theme and a dark theme for the same style names.
///
/// ```rust
/// use kitbash::render::OutputMode;
/// use kitbash::theme::{AdaptiveTheme, ColorMode};
///
/// let themes = AdaptiveTheme::report();
/// // Plain text never needs the OS appearance.
/// let theme = themes.select(OutputMode::Text);
/// assert!(std::ptr::eq(theme, themes.for_mode(ColorMode::Light)));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The palettes the validator report ships with.
    pub fn report() -> Self {
        Self::new(Theme::report_light(), Theme::report_dark())
    }

    pub fn for_mode(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Picks the theme for rendering in `output`.
    ///
    /// Modes without colour get the light theme as is; the two only differ in
    /// escape codes, so detection would be wasted.
    pub fn select(&self, output: OutputMode) -> &Theme {
        if output.should_use_color() {
            self.for_mode(detect_color_mode())
        } else {
            &self.light
        }
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::report()
    }
}
