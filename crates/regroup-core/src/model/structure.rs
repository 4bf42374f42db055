use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::errors::{RegroupError, Result};

/// Structure - an ordered sequence of groups, each an ordered sequence of items
///
/// Group order and item order are both meaningful. Groups may be empty and
/// are never pruned implicitly. Edits never touch a Structure in place; they
/// build a new value and leave this one valid.
///
/// Serializes as a plain nested array, e.g. `[["a","b"],[],["c"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Structure<T> {
    groups: Vec<Vec<T>>,
}

impl<T> Structure<T> {
    /// Create a Structure with no groups
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn from_groups(groups: Vec<Vec<T>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<T>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Vec<T>> {
        self.groups
    }

    pub fn group(&self, group_index: usize) -> Option<&[T]> {
        self.groups.get(group_index).map(Vec::as_slice)
    }

    pub fn get(&self, location: Location) -> Option<&T> {
        self.group(location.group_index)?.get(location.item_index)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of items across all groups
    ///
    /// Recomputed from the groups on every call.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get a group by index
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocation` if no group exists at `group_index`.
    pub fn group_checked(&self, group_index: usize) -> Result<&[T]> {
        self.group(group_index)
            .ok_or(RegroupError::InvalidLocation {
                group_index,
                group_count: self.groups.len(),
            })
    }

    /// Get an item by location
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocation` if the group does not exist, or
    /// `ItemOutOfRange` if the group has no item at `item_index`.
    pub fn item_checked(&self, location: Location) -> Result<&T> {
        let group = self.group_checked(location.group_index)?;
        group
            .get(location.item_index)
            .ok_or(RegroupError::ItemOutOfRange {
                group_index: location.group_index,
                item_index: location.item_index,
                group_len: group.len(),
            })
    }
}

impl<T> Default for Structure<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Vec<T>>> for Structure<T> {
    fn from(groups: Vec<Vec<T>>) -> Self {
        Self::from_groups(groups)
    }
}

impl<T> FromIterator<Vec<T>> for Structure<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::from_groups(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Structure<char> {
        Structure::from(vec![vec!['A', 'B'], vec![], vec!['C', 'D', 'E']])
    }

    #[test]
    fn test_item_count_sums_group_lengths() {
        assert_eq!(sample().item_count(), 5);
        assert_eq!(Structure::<char>::new().item_count(), 0);
    }

    #[test]
    fn test_item_checked_distinguishes_group_and_item_errors() {
        let s = sample();

        assert_eq!(s.item_checked(Location::new(2, 1)), Ok(&'D'));
        assert_eq!(
            s.item_checked(Location::new(3, 0)),
            Err(RegroupError::InvalidLocation {
                group_index: 3,
                group_count: 3
            })
        );
        assert_eq!(
            s.item_checked(Location::new(1, 0)),
            Err(RegroupError::ItemOutOfRange {
                group_index: 1,
                item_index: 0,
                group_len: 0
            })
        );
    }

    #[test]
    fn test_serializes_as_nested_array() {
        let s = Structure::from(vec![vec!["a".to_string()], vec![]]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"[["a"],[]]"#);

        let back: Structure<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
