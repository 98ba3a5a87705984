//! Ordered, deduplicated class lists.

use serde::Serialize;

/// An ordered list of utility classes with exact duplicates removed.
///
/// The first occurrence of a class keeps its position. Conflicting classes
/// (`px-2` vs `px-4`) are not reconciled here; that is the job of whatever
/// class merger consumes the list, which relies on the order preserved here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class unless it is empty or already present.
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if class.is_empty() || self.contains(&class) {
            return;
        }
        self.classes.push(class);
    }

    /// Appends every whitespace-separated class in `classes`.
    pub fn extend_str(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.push(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.classes
    }
}

impl<S: Into<String>> Extend<S> for ClassList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for class in iter {
            self.push(class);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_iter()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dedupes_and_keeps_first_position() {
        let mut list = ClassList::new();
        list.push("flex");
        list.push("px-4");
        list.push("flex");
        assert_eq!(list.to_string(), "flex px-4");
    }

    #[test]
    fn test_conflicting_classes_are_kept_in_order() {
        let list: ClassList = ["px-2", "md:px-6", "px-4"].into_iter().collect();
        assert_eq!(list.into_vec(), vec!["px-2", "md:px-6", "px-4"]);
    }

    #[test]
    fn test_extend_str_splits_on_whitespace() {
        let mut list = ClassList::new();
        list.extend_str("  p-2   md:p-4 ");
        list.extend_str("");
        assert_eq!(list.len(), 2);
        assert!(list.contains("md:p-4"));
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let mut list = ClassList::new();
        list.push("");
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_serializes_as_array() {
        let list: ClassList = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }
}
