//! Accumulated validation issues.

use serde::Serialize;

/// What is wrong with a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent, null, or an empty string.
    MissingField { field: String },
    /// `type` is not one of the four registry kinds.
    InvalidType { value: String },
    /// `files` is present but not an array.
    FilesNotArray,
    /// A `files` entry is neither a path string nor an object with `path`.
    InvalidFileEntry { index: usize },
    /// A file path is absolute or climbs out of the project root with `..`.
    FileOutsideRoot { path: String },
    /// A referenced file does not exist under the project root.
    MissingFile { path: String },
    /// `registryDependencies` is present but not an array.
    DependenciesNotArray,
    /// A dependency names no item in the manifest.
    UnknownDependency { name: String },
    /// `meta.tier` is absent or not `free`/`premium`.
    InvalidTier { value: Option<String> },
    /// Another item earlier in the manifest has the same name.
    DuplicateName { name: String },
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::MissingField { field } => {
                write!(f, "missing required field `{}`", field)
            }
            IssueKind::InvalidType { value } => {
                write!(
                    f,
                    "invalid type {} (expected one of: ui, lib, hook, theme)",
                    value
                )
            }
            IssueKind::FilesNotArray => write!(f, "`files` must be an array"),
            IssueKind::InvalidFileEntry { index } => write!(
                f,
                "files[{}] must be a path string or an object with a `path` field",
                index
            ),
            IssueKind::FileOutsideRoot { path } => {
                write!(f, "file path leaves the project root: {}", path)
            }
            IssueKind::MissingFile { path } => write!(f, "file not found: {}", path),
            IssueKind::DependenciesNotArray => {
                write!(f, "`registryDependencies` must be an array")
            }
            IssueKind::UnknownDependency { name } => {
                write!(f, "registryDependencies references unknown item `{}`", name)
            }
            IssueKind::InvalidTier { value: Some(value) } => {
                write!(f, "meta.tier must be \"free\" or \"premium\", found {}", value)
            }
            IssueKind::InvalidTier { value: None } => write!(f, "missing meta.tier"),
            IssueKind::DuplicateName { name } => write!(f, "duplicate item name `{}`", name),
        }
    }
}

/// One problem found in one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// The item's name, or `item[<index>]` when it has no usable name.
    pub item: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(item: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            item: item.into(),
            kind,
        }
    }

    /// The issue text without the item label.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.item, self.kind)
    }
}
