//! Background, corner radius, shadow and border props.
//!
//! Visual props are scalar only; they do not take breakpoint maps.

use super::class_list::ClassList;
use super::token::semantic_token;

semantic_token! {
    /// A background color from the design palette.
    pub enum Background {
        Transparent => "transparent",
        Background => "background",
        Foreground => "foreground",
        Card => "card",
        Primary => "primary",
        Secondary => "secondary",
        Accent => "accent",
        Destructive => "destructive",
        Muted => "muted",
    }
}

semantic_token! {
    /// A corner radius.
    pub enum Rounded {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
        Xxxl => "3xl",
        Full => "full",
    }
}

semantic_token! {
    /// A drop shadow size.
    pub enum Shadow {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
    }
}

semantic_token! {
    /// A border width.
    pub enum Border {
        None => "none",
        /// The framework's default 1px border.
        Base => "base",
        Two => "2",
        Four => "4",
        Eight => "8",
    }
}

impl Background {
    pub fn class(&self) -> String {
        format!("bg-{}", self.as_str())
    }
}

impl Rounded {
    pub fn class(&self) -> String {
        format!("rounded-{}", self.as_str())
    }
}

impl Shadow {
    pub fn class(&self) -> String {
        format!("shadow-{}", self.as_str())
    }
}

impl Border {
    pub fn class(&self) -> String {
        match self {
            Border::None => "border-0".to_string(),
            Border::Base => "border".to_string(),
            other => format!("border-{}", other.as_str()),
        }
    }
}

/// The visual props of a layout primitive. Absent fields emit nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualProps {
    pub bg: Option<Background>,
    pub rounded: Option<Rounded>,
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
}

/// Resolves visual props, in `bg, rounded, shadow, border` order.
///
/// ```rust
/// use kitbash::style::{resolve_visual, Border, VisualProps};
///
/// let props = VisualProps {
///     bg: Some("card".into()),
///     border: Some(Border::Base),
///     ..Default::default()
/// };
/// assert_eq!(resolve_visual(&props).to_string(), "bg-card border");
/// ```
pub fn resolve_visual(props: &VisualProps) -> ClassList {
    let mut classes = ClassList::new();
    if let Some(bg) = &props.bg {
        classes.push(bg.class());
    }
    if let Some(rounded) = &props.rounded {
        classes.push(rounded.class());
    }
    if let Some(shadow) = &props.shadow {
        classes.push(shadow.class());
    }
    if let Some(border) = &props.border {
        classes.push(border.class());
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_props_emit_nothing() {
        assert!(resolve_visual(&VisualProps::default()).is_empty());
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let props = VisualProps {
            border: Some(Border::Two),
            shadow: Some(Shadow::Lg),
            rounded: Some(Rounded::Full),
            bg: Some(Background::Primary),
        };
        assert_eq!(
            resolve_visual(&props).into_vec(),
            vec!["bg-primary", "rounded-full", "shadow-lg", "border-2"]
        );
    }

    #[test]
    fn test_border_table() {
        let cases = [
            ("none", "border-0"),
            ("base", "border"),
            ("2", "border-2"),
            ("4", "border-4"),
            ("8", "border-8"),
        ];
        for (token, class) in cases {
            assert_eq!(Border::from(token).class(), class);
        }
    }

    #[test]
    fn test_background_palette() {
        for token in Background::KNOWN {
            assert_eq!(Background::from(*token).class(), format!("bg-{token}"));
        }
    }

    #[test]
    fn test_rounded_and_shadow_tables() {
        assert_eq!(Rounded::from("3xl").class(), "rounded-3xl");
        assert_eq!(Rounded::None.class(), "rounded-none");
        assert_eq!(Shadow::from("2xl").class(), "shadow-2xl");
        assert_eq!(Shadow::None.class(), "shadow-none");
        assert!(!Rounded::from("base").is_known());
    }

    #[test]
    fn test_unknown_tokens_degrade_to_concatenation() {
        let props = VisualProps {
            bg: Some("chartreuse".into()),
            border: Some("3".into()),
            ..Default::default()
        };
        // Neither class exists in the palette; they are emitted anyway.
        assert_eq!(resolve_visual(&props).to_string(), "bg-chartreuse border-3");
    }
}
