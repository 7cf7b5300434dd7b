//! Set comparison over two collections.
//!
//! Both inputs are treated as sets: duplicates are ignored and every element
//! ends up in exactly one [`ComparisonEntry`]. Entries keep discovery order,
//! which is every element of the left input first, followed by the elements
//! only the right input introduced.

use std::collections::HashMap;
use std::hash::Hash;

/// Membership of a single element across both inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry<T> {
    pub element: T,
    pub in_left: bool,
    pub in_right: bool,
}

/// Result of comparing two collections. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    entries: Vec<ComparisonEntry<T>>,
}

impl<T> Comparison<T>
where
    T: Eq + Hash + Clone,
{
    /// Compare `left` against `right`.
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = T>,
        R: IntoIterator<Item = T>,
    {
        let mut entries: Vec<ComparisonEntry<T>> = Vec::new();
        let mut index: HashMap<T, usize> = HashMap::new();

        for element in left {
            if !index.contains_key(&element) {
                index.insert(element.clone(), entries.len());
                entries.push(ComparisonEntry { element, in_left: true, in_right: false });
            }
        }

        for element in right {
            match index.get(&element) {
                Some(&position) => entries[position].in_right = true,
                None => {
                    index.insert(element.clone(), entries.len());
                    entries.push(ComparisonEntry { element, in_left: false, in_right: true });
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[ComparisonEntry<T>] {
        &self.entries
    }

    /// Elements present only in the left input.
    pub fn left_only(&self) -> Vec<T> {
        self.select(|entry| entry.in_left && !entry.in_right)
    }

    /// Elements present only in the right input.
    pub fn right_only(&self) -> Vec<T> {
        self.select(|entry| entry.in_right && !entry.in_left)
    }

    /// Elements present in both inputs.
    pub fn both(&self) -> Vec<T> {
        self.select(|entry| entry.in_left && entry.in_right)
    }

    fn select(&self, keep: impl Fn(&ComparisonEntry<T>) -> bool) -> Vec<T> {
        self.entries.iter().filter(|entry| keep(entry)).map(|entry| entry.element.clone()).collect()
    }
}
