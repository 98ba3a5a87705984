//! The display prop.

use super::token::semantic_token;

semantic_token! {
    /// A CSS display kind.
    pub enum DisplayKind {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        Grid => "grid",
        /// Emits `hidden`, not `display-none`.
        Hidden => "none",
    }
}

/// Resolves a display kind to its class.
///
/// Every known kind maps to the class of the same name except `none`, which
/// maps to `hidden`. Unknown kinds are emitted verbatim.
///
/// ```rust
/// use kitbash::style::{resolve_display, DisplayKind};
///
/// assert_eq!(resolve_display(&DisplayKind::from("none")), "hidden");
/// assert_eq!(resolve_display(&DisplayKind::InlineBlock), "inline-block");
/// ```
pub fn resolve_display(value: &DisplayKind) -> String {
    match value {
        DisplayKind::Hidden => "hidden".to_string(),
        other => other.as_str().to_string(),
    }
}
