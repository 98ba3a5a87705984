//! Output mode selection.

use console::Term;

/// How a report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputMode {
    /// Styled when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// Style names as `[name]...[/name]` markers.
    TermDebug,
    /// The report as JSON.
    Json,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    pub fn is_debug(self) -> bool {
        self == OutputMode::TermDebug
    }

    pub fn is_structured(self) -> bool {
        self == OutputMode::Json
    }
}
