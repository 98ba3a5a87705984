//! Responsive values and breakpoint expansion.
//!
//! A style prop is either a bare token, applied at every viewport width, or a
//! per-breakpoint map. [`resolve_responsive`] turns either shape into utility
//! classes, always in canonical breakpoint order.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::breakpoint::Breakpoint;

/// A value that is either a scalar or keyed by breakpoint.
///
/// Deserializes from a bare value (`"md"`) or from an object keyed by
/// breakpoint name (`{"base": "sm", "md": "lg"}`). Object keys that are not
/// breakpoints are dropped, as with [`ResponsiveValue::from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// Applies at every width, emitted without a prefix.
    Scalar(T),
    /// One value per breakpoint. An empty map is legal and yields no classes.
    Responsive(BTreeMap<Breakpoint, T>),
}

impl<T> ResponsiveValue<T> {
    /// Builds a breakpoint map from string-keyed pairs.
    ///
    /// Keys that do not name a breakpoint are dropped without complaint.
    /// Later duplicates of a key replace earlier ones.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let map = pairs
            .into_iter()
            .filter_map(|(key, value)| Breakpoint::parse(key.as_ref()).map(|bp| (bp, value)))
            .collect();
        ResponsiveValue::Responsive(map)
    }

    /// Adds or replaces the value at `breakpoint`.
    ///
    /// A scalar is promoted to a map holding it under `base` first.
    pub fn at(self, breakpoint: Breakpoint, value: T) -> Self {
        let mut map = match self {
            ResponsiveValue::Scalar(base) => BTreeMap::from([(Breakpoint::Base, base)]),
            ResponsiveValue::Responsive(map) => map,
        };
        map.insert(breakpoint, value);
        ResponsiveValue::Responsive(map)
    }

    /// Iterates `(breakpoint, value)` entries in canonical order.
    ///
    /// A scalar reports itself under [`Breakpoint::Base`].
    pub fn entries(&self) -> Box<dyn Iterator<Item = (Breakpoint, &T)> + '_> {
        match self {
            ResponsiveValue::Scalar(value) => Box::new(std::iter::once((Breakpoint::Base, value))),
            ResponsiveValue::Responsive(map) => Box::new(map.iter().map(|(bp, v)| (*bp, v))),
        }
    }
}

impl<'de, T> Deserialize<'de> for ResponsiveValue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire<T> {
            Scalar(T),
            Map(BTreeMap<String, T>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Scalar(value) => ResponsiveValue::Scalar(value),
            Wire::Map(map) => ResponsiveValue::from_pairs(map),
        })
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Scalar(value)
    }
}

impl<T> FromIterator<(Breakpoint, T)> for ResponsiveValue<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        ResponsiveValue::Responsive(iter.into_iter().collect())
    }
}

/// Expands a responsive value into individual class tokens.
///
/// `build` produces the unprefixed class for one value; the breakpoint
/// prefix is applied here.
pub fn responsive_classes<T, F>(value: &ResponsiveValue<T>, build: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    value
        .entries()
        .map(|(bp, token)| bp.apply(&build(token)))
        .collect()
}

/// Resolves a responsive value to a space-joined class string.
///
/// Scalars produce a single unprefixed class. Maps produce one class per
/// present breakpoint in `base, sm, md, lg, xl, 2xl` order; `base` is
/// unprefixed and every other breakpoint is prefixed `"<bp>:"`.
///
/// `build` is not validated: whatever it returns for a token is emitted.
///
/// ```rust
/// use kitbash::style::{resolve_responsive, Breakpoint, ResponsiveValue};
///
/// let value: ResponsiveValue<&str> = [(Breakpoint::Md, "row"), (Breakpoint::Base, "col")]
///     .into_iter()
///     .collect();
/// assert_eq!(resolve_responsive(&value, |d| format!("flex-{d}")), "flex-col md:flex-row");
/// ```
pub fn resolve_responsive<T, F>(value: &ResponsiveValue<T>, build: F) -> String
where
    F: Fn(&T) -> String,
{
    responsive_classes(value, build).join(" ")
}
