//! Responsive utility-class resolution and registry validation for copy-in UI kits.
//!
//! Kitbash has two halves that share a crate because they ship together:
//!
//! - [`style`]: turns semantic layout props (`p: "md"`, `bg: "card"`,
//!   `direction: {base: "col", md: "row"}`) into utility class strings with
//!   breakpoint prefixes
//! - [`registry`]: validates a `registry.json` manifest against the files on
//!   disk and gates item distribution by access tier
//!
//! [`theme`] and [`render`] format validation reports for the terminal or as
//! JSON. The `validate-registry` binary (feature `cli`) wires them together.
//!
//! # Example
//!
//! ```rust
//! use kitbash::style::{BoxProps, Breakpoint, ResponsiveValue, SpacingProperty, SpacingSize};
//!
//! let padding = ResponsiveValue::from(SpacingSize::Sm).at(Breakpoint::Md, SpacingSize::Lg);
//! let props = BoxProps::new()
//!     .spacing(SpacingProperty::P, padding)
//!     .bg("card")
//!     .rounded("lg");
//!
//! assert_eq!(props.classes().to_string(), "p-2 md:p-6 bg-card rounded-lg");
//! ```

pub mod registry;
pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use registry::{validate_path, ValidationReport};
pub use render::{render_report, OutputMode};
pub use style::{BoxProps, ClassList, FlexProps, ResponsiveValue};
pub use theme::{AdaptiveTheme, Theme};
pub use util::{display_width, fit_to_width, truncate_to_width};
