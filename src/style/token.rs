//! Semantic token enums with pass-through for unknown values.
//!
//! Each token family is a closed set of known names plus an `Other` variant.
//! Conversion from a string never fails: unrecognised names land in `Other`
//! and resolve by plain concatenation, so design-system tokens introduced
//! upstream keep working before this crate learns about them.

/// Declares a semantic token enum.
///
/// Generates the enum (with a trailing `Other(String)` variant), `KNOWN`,
/// `as_str`, `is_known`, string conversions, serde support via strings,
/// `Display`, and a `&str` shortcut into [`ResponsiveValue`](super::ResponsiveValue).
macro_rules! semantic_token {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A token outside the known set, passed through verbatim.
            Other(String),
        }

        impl $name {
            /// Names of every known token, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($token),+];

            /// Returns the token name.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $token, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            /// Returns `true` when the token belongs to the known set.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $( $token => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                $name::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> String {
                token.as_str().to_string()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $crate::style::ResponsiveValue<$name> {
            fn from(raw: &str) -> Self {
                $crate::style::ResponsiveValue::Scalar($name::from(raw))
            }
        }
    };
}

pub(crate) use semantic_token;
