use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RegroupError;

/// Location - a `(group_index, item_index)` coordinate into a Structure
///
/// A Location is only meaningful against the Structure version it was
/// computed from; any earlier edit in the same step may shift it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Zero-based index of the group
    pub group_index: usize,

    /// Zero-based index of the item within its group
    pub item_index: usize,
}

impl Location {
    pub fn new(group_index: usize, item_index: usize) -> Self {
        Self {
            group_index,
            item_index,
        }
    }
}

impl From<(usize, usize)> for Location {
    fn from((group_index, item_index): (usize, usize)) -> Self {
        Self::new(group_index, item_index)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_index, self.item_index)
    }
}

/// Parses the `GROUP:ITEM` text form, e.g. `2:0`
impl FromStr for Location {
    type Err = RegroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax_error = || RegroupError::LocationSyntax {
            input: s.to_string(),
        };

        let (group, item) = s.trim().split_once(':').ok_or_else(syntax_error)?;
        let group_index = group.trim().parse().map_err(|_| syntax_error())?;
        let item_index = item.trim().parse().map_err(|_| syntax_error())?;

        Ok(Self::new(group_index, item_index))
    }
}
