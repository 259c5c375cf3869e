//! Items and shelf addressing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an item within one warehouse.
///
/// Assigned at load time from the item's position in the description, so two
/// items with identical title, author and location remain distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name of one shelf column, `"{aisle}-{column}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnTag(String);

impl ColumnTag {
    /// Wrap an existing tag string.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Tag for a column of the given aisle.
    pub fn from_parts(aisle: &str, column: u32) -> Self {
        Self(format!("{aisle}-{column}"))
    }

    /// The tag text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Aisle part of the tag (text before the first `-`).
    pub fn aisle(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }
}

impl fmt::Display for ColumnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an item sits: aisle letter, column within the aisle, shelf row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLocation {
    /// Aisle letter, e.g. `"A"`
    pub aisle: String,
    /// Column number within the aisle
    pub column: u32,
    /// Shelf row within the column
    pub row: u32,
}

impl ShelfLocation {
    /// Create a new location descriptor.
    pub fn new(aisle: impl Into<String>, column: u32, row: u32) -> Self {
        Self {
            aisle: aisle.into(),
            column,
            row,
        }
    }

    /// Tag of the column holding this shelf.
    pub fn column_tag(&self) -> ColumnTag {
        ColumnTag::from_parts(&self.aisle, self.column)
    }
}

/// A pickable item.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Load-time identity
    pub id: ItemId,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Shelf location
    pub location: ShelfLocation,
}

impl Item {
    /// Column tag of the item's shelf column.
    pub fn column_tag(&self) -> ColumnTag {
        self.location.column_tag()
    }

    /// Display tag `"{aisle}-{column}-{row}"`.
    ///
    /// Output only; identity is [`Item::id`].
    pub fn display_tag(&self) -> String {
        format!(
            "{}-{}-{}",
            self.location.aisle, self.location.column, self.location.row
        )
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} by {}", self.display_tag(), self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: usize, aisle: &str, column: u32, row: u32) -> Item {
        Item {
            id: ItemId(id),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            location: ShelfLocation::new(aisle, column, row),
        }
    }

    #[test]
    fn test_tags() {
        let item = book(0, "C", 12, 4);
        assert_eq!(item.column_tag().as_str(), "C-12");
        assert_eq!(item.display_tag(), "C-12-4");
        assert_eq!(item.column_tag().aisle(), "C");
    }

    #[test]
    fn test_identical_items_stay_distinct() {
        let a = book(0, "A", 3, 1);
        let b = book(1, "A", 3, 1);
        assert_eq!(a.display_tag(), b.display_tag());
        assert_ne!(a, b);
    }
}
