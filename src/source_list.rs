use std::fmt;

/// An ordered, duplicate-free list of CSP source expressions.
///
/// Membership has set semantics while output order has sequence semantics:
/// the first insertion of a value fixes its position. Every operation
/// returns a new list and leaves the receiver untouched.
///
/// # Examples
///
/// ```
/// use csp_policy::SourceList;
///
/// let list = SourceList::from_iter(["'self'", "https://cdn.example.com"]);
/// let next = list.add("'self'").add("https://img.example.com");
///
/// assert_eq!(list.to_string(), "'self' https://cdn.example.com");
/// assert_eq!(
///     next.to_string(),
///     "'self' https://cdn.example.com https://img.example.com"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    items: Vec<String>,
}

impl SourceList {
    /// Creates an empty source list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns a list with `item` appended, unless it is already present.
    #[must_use]
    pub fn add(&self, item: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push_unique(item.into());
        next
    }

    /// Returns a list with every item of `items` added in order.
    ///
    /// Items already present, or repeated within `items`, keep the position
    /// of their first occurrence.
    #[must_use]
    pub fn add_list<I, S>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        for item in items {
            next.push_unique(item.into());
        }
        next
    }

    /// Returns a list without `item`. Removing an absent item is a no-op.
    #[must_use]
    pub fn remove(&self, item: &str) -> Self {
        Self {
            items: self.items.iter().filter(|i| *i != item).cloned().collect(),
        }
    }

    /// Returns a list without any of `items`.
    #[must_use]
    pub fn remove_list<I, S>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: Vec<S> = items.into_iter().collect();
        Self {
            items: self
                .items
                .iter()
                .filter(|i| !doomed.iter().any(|d| d.as_ref() == i.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Returns `true` if `item` is in the list.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the entries in output order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Returns an owned copy of the entries in output order.
    pub fn to_sequence(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Iterates over the entries in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    // Only called on a fresh clone, never on a list someone else can see.
    fn push_unique(&mut self, item: String) {
        if !self.contains(&item) {
            self.items.push(item);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SourceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new().add_list(iter)
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_new_item() {
        let list = SourceList::new().add("'self'").add("https://a.example");
        assert_eq!(list.as_slice(), ["'self'", "https://a.example"]);
    }

    #[test]
    fn add_is_idempotent() {
        let once = SourceList::new().add("https://a.example");
        let twice = once.add("https://a.example");
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn add_leaves_original_untouched() {
        let original = SourceList::from_iter(["'self'"]);
        let _next = original.add("https://a.example");
        assert_eq!(original.as_slice(), ["'self'"]);
    }

    #[test]
    fn add_list_keeps_first_seen_order() {
        let list = SourceList::from_iter(["'self'", "https://fb.example"]).add_list([
            "https://a.example",
            "https://b.example",
            "https://fb.example",
            "https://a.example",
        ]);
        assert_eq!(
            list.to_string(),
            "'self' https://fb.example https://a.example https://b.example"
        );
    }

    #[test]
    fn remove_drops_item_and_keeps_order() {
        let list = SourceList::from_iter(["a", "b", "c"]).remove("b");
        assert_eq!(list.as_slice(), ["a", "c"]);
    }

    #[test]
    fn remove_absent_item_is_noop() {
        let list = SourceList::from_iter(["a", "b"]);
        assert_eq!(list.remove("z"), list);
    }

    #[test]
    fn remove_list_drops_every_match() {
        let list = SourceList::from_iter(["a", "b", "c", "d"]).remove_list(["d", "b", "x"]);
        assert_eq!(list.to_sequence(), vec!["a", "c"]);
    }

    #[test]
    fn from_iter_deduplicates() {
        let list: SourceList = vec!["a", "a", "b"].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert!(list.contains("a"));
        assert!(!list.contains("c"));
    }

    #[test]
    fn empty_list_displays_as_empty_string() {
        let list = SourceList::default();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_source() -> impl Strategy<Value = String> {
            prop::string::string_regex("[a-z:/.'-]{1,12}").unwrap()
        }

        proptest! {
            /// Property: adding an item twice equals adding it once
            #[test]
            fn proptest_add_idempotent(
                initial in prop::collection::vec(arb_source(), 0..8),
                item in arb_source()
            ) {
                let list = SourceList::from_iter(initial);
                prop_assert_eq!(list.add(item.clone()).add(item.clone()), list.add(item));
            }

            /// Property: entries stay unique after any sequence of adds
            #[test]
            fn proptest_entries_unique(items in prop::collection::vec(arb_source(), 0..16)) {
                let list = SourceList::new().add_list(items);
                let mut seen = std::collections::HashSet::new();
                for entry in &list {
                    prop_assert!(seen.insert(entry.clone()), "duplicate entry {}", entry);
                }
            }

            /// Property: remove(add(L, x), x) drops x and preserves the rest in order
            #[test]
            fn proptest_remove_after_add(
                initial in prop::collection::vec(arb_source(), 0..8),
                item in arb_source()
            ) {
                let list = SourceList::from_iter(initial);
                let removed = list.add(item.clone()).remove(&item);

                prop_assert!(!removed.contains(&item));
                let expected: Vec<String> =
                    list.iter().filter(|i| **i != item).cloned().collect();
                prop_assert_eq!(removed.to_sequence(), expected);
            }
        }
    }
}
