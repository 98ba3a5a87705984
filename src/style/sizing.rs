//! Width and height props.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::responsive::{resolve_responsive, ResponsiveValue};

/// A sizing property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizingProperty {
    #[serde(rename = "w")]
    W,
    #[serde(rename = "h")]
    H,
    #[serde(rename = "min-w")]
    MinW,
    #[serde(rename = "max-w")]
    MaxW,
    #[serde(rename = "min-h")]
    MinH,
    #[serde(rename = "max-h")]
    MaxH,
}

impl SizingProperty {
    pub const ALL: [SizingProperty; 6] = [
        SizingProperty::W,
        SizingProperty::H,
        SizingProperty::MinW,
        SizingProperty::MaxW,
        SizingProperty::MinH,
        SizingProperty::MaxH,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SizingProperty::W => "w",
            SizingProperty::H => "h",
            SizingProperty::MinW => "min-w",
            SizingProperty::MaxW => "max-w",
            SizingProperty::MinH => "min-h",
            SizingProperty::MaxH => "max-h",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

/// A sizing value: a literal pixel length or a framework token.
///
/// Pixel lengths keep the number exactly as the props supplied it, so
/// fractional and negative values survive (`12.5` → `[12.5px]`). Tokens
/// (`full`, `screen`, `1/2`, ...) are emitted verbatim; there is no scale
/// lookup for sizing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizingValue {
    Px(Number),
    Token(String),
}

impl SizingValue {
    fn suffix(&self) -> String {
        match self {
            SizingValue::Px(n) => format!("[{}px]", px_literal(n)),
            SizingValue::Token(token) => token.clone(),
        }
    }
}

/// Integers print as-is; floats print without a trailing `.0`.
fn px_literal(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

impl From<u32> for SizingValue {
    fn from(px: u32) -> Self {
        SizingValue::Px(Number::from(px))
    }
}

impl From<i32> for SizingValue {
    fn from(px: i32) -> Self {
        SizingValue::Px(Number::from(px))
    }
}

impl From<f64> for SizingValue {
    /// Non-finite values have no JSON number form and become tokens.
    fn from(px: f64) -> Self {
        match Number::from_f64(px) {
            Some(n) => SizingValue::Px(n),
            None => SizingValue::Token(px.to_string()),
        }
    }
}

impl From<&str> for SizingValue {
    fn from(token: &str) -> Self {
        SizingValue::Token(token.to_string())
    }
}

impl From<u32> for ResponsiveValue<SizingValue> {
    fn from(px: u32) -> Self {
        ResponsiveValue::Scalar(SizingValue::from(px))
    }
}

impl From<i32> for ResponsiveValue<SizingValue> {
    fn from(px: i32) -> Self {
        ResponsiveValue::Scalar(SizingValue::from(px))
    }
}

impl From<f64> for ResponsiveValue<SizingValue> {
    fn from(px: f64) -> Self {
        ResponsiveValue::Scalar(SizingValue::from(px))
    }
}

impl From<&str> for ResponsiveValue<SizingValue> {
    fn from(token: &str) -> Self {
        ResponsiveValue::Scalar(SizingValue::from(token))
    }
}

/// Resolves a sizing prop to its class string.
///
/// ```rust
/// use kitbash::style::{resolve_sizing, SizingProperty};
///
/// assert_eq!(resolve_sizing(SizingProperty::H, &300u32.into()), "h-[300px]");
/// assert_eq!(resolve_sizing(SizingProperty::W, &"full".into()), "w-full");
/// ```
pub fn resolve_sizing(property: SizingProperty, value: &ResponsiveValue<SizingValue>) -> String {
    resolve_responsive(value, |v| format!("{}-{}", property.as_str(), v.suffix()))
}
