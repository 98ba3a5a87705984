//! Padding and margin props.

use serde::{Deserialize, Serialize};

use super::responsive::{resolve_responsive, ResponsiveValue};
use super::token::semantic_token;

semantic_token! {
    /// A semantic spacing size.
    ///
    /// Known sizes map onto a fixed numeric scale; `auto` bypasses it.
    pub enum SpacingSize {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
        /// Emits `<property>-auto`. Meaningful for margins.
        Auto => "auto",
    }
}

impl SpacingSize {
    /// Returns the numeric scale step for a sized token.
    ///
    /// `auto` and unknown tokens have no step.
    pub fn scale(&self) -> Option<u8> {
        match self {
            SpacingSize::Xs => Some(1),
            SpacingSize::Sm => Some(2),
            SpacingSize::Md => Some(4),
            SpacingSize::Lg => Some(6),
            SpacingSize::Xl => Some(8),
            SpacingSize::Xxl => Some(12),
            SpacingSize::Auto | SpacingSize::Other(_) => None,
        }
    }

    /// Returns the class suffix for this size.
    ///
    /// Unknown tokens are passed through as-is.
    pub fn suffix(&self) -> String {
        match self.scale() {
            Some(step) => step.to_string(),
            None => self.as_str().to_string(),
        }
    }
}

/// A spacing direction key.
///
/// Declaration order is the order in which layout primitives emit spacing
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingProperty {
    P,
    Px,
    Py,
    Pt,
    Pb,
    Pl,
    Pr,
    M,
    Mx,
    My,
    Mt,
    Mb,
    Ml,
    Mr,
}

impl SpacingProperty {
    pub const ALL: [SpacingProperty; 14] = [
        SpacingProperty::P,
        SpacingProperty::Px,
        SpacingProperty::Py,
        SpacingProperty::Pt,
        SpacingProperty::Pb,
        SpacingProperty::Pl,
        SpacingProperty::Pr,
        SpacingProperty::M,
        SpacingProperty::Mx,
        SpacingProperty::My,
        SpacingProperty::Mt,
        SpacingProperty::Mb,
        SpacingProperty::Ml,
        SpacingProperty::Mr,
    ];

    /// Returns the utility prefix, which is also the prop name.
    pub fn as_str(self) -> &'static str {
        match self {
            SpacingProperty::P => "p",
            SpacingProperty::Px => "px",
            SpacingProperty::Py => "py",
            SpacingProperty::Pt => "pt",
            SpacingProperty::Pb => "pb",
            SpacingProperty::Pl => "pl",
            SpacingProperty::Pr => "pr",
            SpacingProperty::M => "m",
            SpacingProperty::Mx => "mx",
            SpacingProperty::My => "my",
            SpacingProperty::Mt => "mt",
            SpacingProperty::Mb => "mb",
            SpacingProperty::Ml => "ml",
            SpacingProperty::Mr => "mr",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Returns `true` for the margin family.
    pub fn is_margin(self) -> bool {
        self.as_str().starts_with('m')
    }
}

/// Builds a single spacing class for an arbitrary utility prefix.
pub(crate) fn spacing_class(prefix: &str, size: &SpacingSize) -> String {
    format!("{}-{}", prefix, size.suffix())
}

/// Resolves a spacing prop to its class string.
///
/// ```rust
/// use kitbash::style::{resolve_spacing, Breakpoint, ResponsiveValue, SpacingProperty, SpacingSize};
///
/// assert_eq!(resolve_spacing(SpacingProperty::Px, &"md".into()), "px-4");
///
/// let value = ResponsiveValue::Scalar(SpacingSize::Sm).at(Breakpoint::Md, SpacingSize::Lg);
/// assert_eq!(resolve_spacing(SpacingProperty::Px, &value), "px-2 md:px-6");
/// ```
pub fn resolve_spacing(property: SpacingProperty, value: &ResponsiveValue<SpacingSize>) -> String {
    resolve_responsive(value, |size| spacing_class(property.as_str(), size))
}
