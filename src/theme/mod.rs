//! Terminal themes for report output.
//!
//! - [`Theme`]: named styles with aliases
//! - [`AdaptiveTheme`]: a light/dark pair, picked per output mode

mod adaptive;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, AdaptiveTheme, ColorMode};
pub use error::ThemeError;
pub use theme::{Theme, ThemeStyle, MISSING_STYLE_INDICATOR};
