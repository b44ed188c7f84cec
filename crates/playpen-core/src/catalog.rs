use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Colors an item can carry. Serialized lowercase, which doubles as the CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Brown,
    Black,
    White,
    Gray,
    Pink,
}

impl ItemColor {
    pub const ALL: [ItemColor; 11] = [
        ItemColor::Red,
        ItemColor::Blue,
        ItemColor::Green,
        ItemColor::Yellow,
        ItemColor::Orange,
        ItemColor::Purple,
        ItemColor::Brown,
        ItemColor::Black,
        ItemColor::White,
        ItemColor::Gray,
        ItemColor::Pink,
    ];

    /// Value used both as the CSS background color and as the encoded answer.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Pink => "pink",
        }
    }

    /// Human-readable label shown under swatches.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::Brown => "Brown",
            Self::Black => "Black",
            Self::White => "White",
            Self::Gray => "Gray",
            Self::Pink => "Pink",
        }
    }
}

/// A named, pictogram-bearing, optionally colored item used to build rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub pictogram: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ItemColor>,
}

impl CatalogItem {
    /// Lowercased first letter of the name.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_lowercase().next())
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<CatalogItem>,
}

/// Validated, immutable list of catalog items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, blank fields and duplicate names.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "name",
                });
            }
            if item.pictogram.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "pictogram",
                });
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from its TOML form (`[[items]]` tables).
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.items)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Items that carry a color.
    pub fn colored(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(|item| item.color.is_some())
    }

    /// Every distinct color present in the catalog, in palette order.
    pub fn palette(&self) -> Vec<ItemColor> {
        self.colored()
            .filter_map(|item| item.color)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of distinct first letters across all items.
    pub fn distinct_initials(&self) -> usize {
        self.items
            .iter()
            .filter_map(CatalogItem::initial)
            .collect::<HashSet<_>>()
            .len()
    }
}
