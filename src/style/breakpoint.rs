//! Responsive breakpoints and their canonical ordering.

use serde::{Deserialize, Serialize};

/// A named responsive threshold.
///
/// The declaration order is the canonical emission order. Classes for a
/// later breakpoint must follow classes for an earlier one so that the CSS
/// framework's source-order override rules pick the more specific value.
/// `Ord` follows that order, so a `BTreeMap<Breakpoint, _>` iterates
/// canonically regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// No viewport condition; emitted without a prefix.
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in canonical ascending order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Returns the wire name of this breakpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Parses a breakpoint name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == name)
    }

    /// Applies this breakpoint's variant prefix to a class.
    ///
    /// `base` leaves the class untouched; every other breakpoint produces
    /// `"<bp>:<class>"`.
    ///
    /// ```rust
    /// use kitbash::style::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::Base.apply("px-4"), "px-4");
    /// assert_eq!(Breakpoint::Md.apply("px-4"), "md:px-4");
    /// ```
    pub fn apply(self, class: &str) -> String {
        match self {
            Breakpoint::Base => class.to_string(),
            bp => format!("{}:{}", bp.as_str(), class),
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
