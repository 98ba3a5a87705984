//! Theme validation errors.

use thiserror::Error;

/// Why a style name failed to resolve to a concrete style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("no style named `{name}` in theme")]
    UnknownStyle { name: String },
    #[error("style `{style}` is an alias for `{target}`, which is not defined")]
    DanglingAlias { style: String, target: String },
    #[error("style aliases loop back on themselves: {}", .chain.join(" -> "))]
    AliasCycle { chain: Vec<String> },
}
