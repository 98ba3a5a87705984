//! Style-prop resolution for layout primitives.
//!
//! This module turns semantic style props into utility classes:
//!
//! - [`ResponsiveValue`]: a scalar token or a per-[`Breakpoint`] map
//! - [`resolve_spacing`], [`resolve_sizing`]: responsive padding, margin, width, height
//! - [`resolve_visual`], [`resolve_display`]: scalar table lookups
//! - [`resolve_flex_alignment`]: the irregular alignment namespace table
//! - [`BoxProps`], [`FlexProps`]: full prop sets, resolved into a [`ClassList`]
//!
//! Resolution never fails. Tokens outside the known sets are carried in an
//! `Other` variant and emitted by plain concatenation, so the output for a
//! bad token looks plausible but means nothing to the CSS framework.

mod token;

mod alignment;
mod breakpoint;
mod class_list;
mod display;
mod props;
mod responsive;
mod sizing;
mod spacing;
mod visual;

pub use alignment::{resolve_flex_alignment, AlignmentProp, FlexAlignment};
pub use breakpoint::Breakpoint;
pub use class_list::ClassList;
pub use display::{resolve_display, DisplayKind};
pub use props::{BoxProps, FlexDirection, FlexProps, FlexWrap};
pub use responsive::{resolve_responsive, responsive_classes, ResponsiveValue};
pub use sizing::{resolve_sizing, SizingProperty, SizingValue};
pub use spacing::{resolve_spacing, SpacingProperty, SpacingSize};
pub use visual::{resolve_visual, Background, Border, Rounded, Shadow, VisualProps};
