//! Flex and grid alignment props.
//!
//! The prop-to-namespace mapping is irregular (`alignItems` becomes `items`,
//! `justifyItems` becomes `justify-items`), so it is spelled out as a table
//! rather than derived from the prop name.

use super::class_list::ClassList;

/// One of the nine alignment props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlignmentProp {
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignContent,
    AlignItems,
    AlignSelf,
    PlaceContent,
    PlaceItems,
    PlaceSelf,
}

impl AlignmentProp {
    pub const ALL: [AlignmentProp; 9] = [
        AlignmentProp::JustifyContent,
        AlignmentProp::JustifyItems,
        AlignmentProp::JustifySelf,
        AlignmentProp::AlignContent,
        AlignmentProp::AlignItems,
        AlignmentProp::AlignSelf,
        AlignmentProp::PlaceContent,
        AlignmentProp::PlaceItems,
        AlignmentProp::PlaceSelf,
    ];

    /// The component prop name, as written in markup.
    pub fn prop_name(self) -> &'static str {
        match self {
            AlignmentProp::JustifyContent => "justifyContent",
            AlignmentProp::JustifyItems => "justifyItems",
            AlignmentProp::JustifySelf => "justifySelf",
            AlignmentProp::AlignContent => "alignContent",
            AlignmentProp::AlignItems => "alignItems",
            AlignmentProp::AlignSelf => "alignSelf",
            AlignmentProp::PlaceContent => "placeContent",
            AlignmentProp::PlaceItems => "placeItems",
            AlignmentProp::PlaceSelf => "placeSelf",
        }
    }

    /// The utility-class namespace for this prop.
    pub fn namespace(self) -> &'static str {
        match self {
            AlignmentProp::JustifyContent => "justify",
            AlignmentProp::JustifyItems => "justify-items",
            AlignmentProp::JustifySelf => "justify-self",
            AlignmentProp::AlignContent => "content",
            AlignmentProp::AlignItems => "items",
            AlignmentProp::AlignSelf => "self",
            AlignmentProp::PlaceContent => "place-content",
            AlignmentProp::PlaceItems => "place-items",
            AlignmentProp::PlaceSelf => "place-self",
        }
    }

    /// Looks up a prop by its component prop name.
    pub fn from_prop_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.prop_name() == name)
    }

    /// Builds `"<namespace>-<value>"`. The value is not checked.
    pub fn class(self, value: &str) -> String {
        format!("{}-{}", self.namespace(), value)
    }
}

/// Alignment props for a flex or grid container.
///
/// Values are free-form strings and pass through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexAlignment {
    pub justify_content: Option<String>,
    pub justify_items: Option<String>,
    pub justify_self: Option<String>,
    pub align_content: Option<String>,
    pub align_items: Option<String>,
    pub align_self: Option<String>,
    pub place_content: Option<String>,
    pub place_items: Option<String>,
    pub place_self: Option<String>,
}

impl FlexAlignment {
    pub fn get(&self, prop: AlignmentProp) -> Option<&str> {
        let value = match prop {
            AlignmentProp::JustifyContent => &self.justify_content,
            AlignmentProp::JustifyItems => &self.justify_items,
            AlignmentProp::JustifySelf => &self.justify_self,
            AlignmentProp::AlignContent => &self.align_content,
            AlignmentProp::AlignItems => &self.align_items,
            AlignmentProp::AlignSelf => &self.align_self,
            AlignmentProp::PlaceContent => &self.place_content,
            AlignmentProp::PlaceItems => &self.place_items,
            AlignmentProp::PlaceSelf => &self.place_self,
        };
        value.as_deref()
    }

    pub fn set(&mut self, prop: AlignmentProp, value: impl Into<String>) {
        let slot = match prop {
            AlignmentProp::JustifyContent => &mut self.justify_content,
            AlignmentProp::JustifyItems => &mut self.justify_items,
            AlignmentProp::JustifySelf => &mut self.justify_self,
            AlignmentProp::AlignContent => &mut self.align_content,
            AlignmentProp::AlignItems => &mut self.align_items,
            AlignmentProp::AlignSelf => &mut self.align_self,
            AlignmentProp::PlaceContent => &mut self.place_content,
            AlignmentProp::PlaceItems => &mut self.place_items,
            AlignmentProp::PlaceSelf => &mut self.place_self,
        };
        *slot = Some(value.into());
    }

    /// Builds alignment props from `(propName, value)` pairs.
    ///
    /// Pairs whose name is not one of the nine alignment props are skipped.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut alignment = FlexAlignment::default();
        for (name, value) in pairs {
            if let Some(prop) = AlignmentProp::from_prop_name(name.as_ref()) {
                alignment.set(prop, value);
            }
        }
        alignment
    }
}

/// Resolves alignment props in [`AlignmentProp::ALL`] order.
///
/// ```rust
/// use kitbash::style::{resolve_flex_alignment, FlexAlignment};
///
/// let props = FlexAlignment {
///     align_items: Some("center".into()),
///     justify_content: Some("between".into()),
///     ..Default::default()
/// };
/// assert_eq!(resolve_flex_alignment(&props).to_string(), "justify-between items-center");
/// ```
pub fn resolve_flex_alignment(props: &FlexAlignment) -> ClassList {
    AlignmentProp::ALL
        .into_iter()
        .filter_map(|prop| props.get(prop).map(|value| prop.class(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_table_is_irregular() {
        let expected = [
            ("justifyContent", "justify"),
            ("justifyItems", "justify-items"),
            ("justifySelf", "justify-self"),
            ("alignContent", "content"),
            ("alignItems", "items"),
            ("alignSelf", "self"),
            ("placeContent", "place-content"),
            ("placeItems", "place-items"),
            ("placeSelf", "place-self"),
        ];
        for (name, namespace) in expected {
            let prop = AlignmentProp::from_prop_name(name).unwrap();
            assert_eq!(prop.namespace(), namespace, "prop {name}");
        }
    }

    #[test]
    fn test_every_prop_emits_one_class() {
        let alignment =
            FlexAlignment::from_pairs(AlignmentProp::ALL.iter().map(|p| (p.prop_name(), "start")));
        let classes = resolve_flex_alignment(&alignment);
        assert_eq!(classes.len(), 9);
        assert!(classes.contains("items-start"));
        assert!(classes.contains("justify-items-start"));
        assert!(classes.contains("self-start"));
    }

    #[test]
    fn test_free_form_values_pass_through() {
        let alignment = FlexAlignment::from_pairs([("alignItems", "flex-start")]);
        // Not a real utility, but the value is not validated.
        assert_eq!(resolve_flex_alignment(&alignment).to_string(), "items-flex-start");
    }

    #[test]
    fn test_unknown_prop_names_are_skipped() {
        let alignment = FlexAlignment::from_pairs([("alignment", "center"), ("gap", "4")]);
        assert!(resolve_flex_alignment(&alignment).is_empty());
    }

    #[test]
    fn test_get_and_set() {
        let mut alignment = FlexAlignment::default();
        alignment.set(AlignmentProp::PlaceSelf, "end");
        assert_eq!(alignment.get(AlignmentProp::PlaceSelf), Some("end"));
        assert_eq!(alignment.get(AlignmentProp::AlignSelf), None);
    }
}
