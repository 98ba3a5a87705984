//! Named terminal styles for report output.

use std::collections::HashMap;

use console::Style;

use super::error::ThemeError;

/// Printed in place of styled text when a template names an unknown style.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A theme entry: a concrete style or the name of another entry.
#[derive(Debug, Clone)]
pub enum ThemeStyle {
    Concrete(Style),
    Alias(String),
}

impl From<Style> for ThemeStyle {
    fn from(style: Style) -> Self {
        ThemeStyle::Concrete(style)
    }
}

impl From<&str> for ThemeStyle {
    fn from(name: &str) -> Self {
        ThemeStyle::Alias(name.to_string())
    }
}

impl From<String> for ThemeStyle {
    fn from(name: String) -> Self {
        ThemeStyle::Alias(name)
    }
}

/// A named collection of styles used when rendering reports.
///
/// Entries are either concrete [`console::Style`]s or aliases to other
/// entries, so a report can speak in semantic names (`error`, `ok`) while the
/// theme decides what those look like.
///
/// # Example
///
/// ```rust
/// use kitbash::theme::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("red", Style::new().red().bold())
///     .add("error", "red")
///     .add("muted", Style::new().dim());
///
/// assert!(theme.validate().is_ok());
/// assert_eq!(theme.apply("error", "boom", false), "boom");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, ThemeStyle>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add<V: Into<ThemeStyle>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Follows aliases from `name` to a concrete style.
    pub fn resolve(&self, name: &str) -> Result<&Style, ThemeError> {
        let mut chain = vec![name];
        loop {
            let current = chain[chain.len() - 1];
            let target = match self.styles.get(current) {
                Some(ThemeStyle::Concrete(style)) => return Ok(style),
                Some(ThemeStyle::Alias(target)) => target.as_str(),
                None if chain.len() == 1 => {
                    return Err(ThemeError::UnknownStyle {
                        name: name.to_string(),
                    })
                }
                None => {
                    return Err(ThemeError::DanglingAlias {
                        style: chain[chain.len() - 2].to_string(),
                        target: current.to_string(),
                    })
                }
            };
            let looped = chain.contains(&target);
            chain.push(target);
            if looped {
                return Err(ThemeError::AliasCycle {
                    chain: chain.into_iter().map(str::to_string).collect(),
                });
            }
        }
    }

    /// Checks that every alias resolves to a concrete style.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut names: Vec<_> = self.styles.keys().collect();
        names.sort();
        for name in names {
            self.resolve(name)?;
        }
        Ok(())
    }

    /// Styles `text` with the entry `name`.
    ///
    /// Unknown names prefix the text with [`MISSING_STYLE_INDICATOR`] so the
    /// mistake is visible in output instead of silently unstyled.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Ok(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Ok(_) => text.to_string(),
            Err(_) => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Wraps `text` in `[name]...[/name]` markers instead of escape codes.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            format!("[{name}]{text}[/{name}]")
        } else {
            format!("[{name}?]{text}[/{name}?]")
        }
    }

    /// Report styles tuned for light terminal backgrounds.
    pub fn report_light() -> Self {
        Self::report_base()
            .add("green", Style::new().green())
            .add("red", Style::new().red())
            .add("label", Style::new().blue().bold())
            .add("count", Style::new().magenta())
    }

    /// Report styles tuned for dark terminal backgrounds.
    pub fn report_dark() -> Self {
        Self::report_base()
            .add("green", Style::new().green().bright())
            .add("red", Style::new().red().bright())
            .add("label", Style::new().cyan().bold())
            .add("count", Style::new().yellow())
    }

    fn report_base() -> Self {
        Theme::new()
            .add("title", Style::new().bold())
            .add("muted", Style::new().dim())
            .add("ok", "green")
            .add("error", "red")
    }
}
