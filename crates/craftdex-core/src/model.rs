//! Raw data models for the archive JSON.
//!
//! These structs mirror the JSON found inside the client jar as closely as
//! possible: unknown fields are carried through `#[serde(flatten)]` maps so
//! the recipes and tags output files reproduce the archive content verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Recipe type string for shaped crafting
pub const TYPE_SHAPED: &str = "minecraft:crafting_shaped";
/// Recipe type string for shapeless crafting
pub const TYPE_SHAPELESS: &str = "minecraft:crafting_shapeless";

/// A single crafting recipe, shaped or shapeless.
///
/// Shapeless recipes carry `ingredients`; shaped recipes carry `key` (the
/// pattern grid itself lives in `extra` and is never interpreted here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe type identifier, e.g. `minecraft:crafting_shaped`
    #[serde(rename = "type")]
    pub kind: String,
    /// The crafted output
    pub result: RecipeResult,
    /// Ordered ingredient slots (shapeless only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientSlot>>,
    /// Pattern symbol to ingredient slot (shaped only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<HashMap<String, IngredientSlot>>,
    /// Fields this tool never interprets (group, pattern, ...), preserved
    /// so the recipes file reproduces the archive JSON verbatim
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Recipe {
    /// Returns true for the two crafting recipe types this tool handles
    pub fn is_crafting(&self) -> bool {
        self.kind == TYPE_SHAPED || self.kind == TYPE_SHAPELESS
    }
}

/// The output side of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResult {
    /// Item identifier of the crafted output
    pub item: String,
    /// Uninterpreted fields (count, ...), preserved verbatim
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One ingredient slot: a single choice or a list of acceptable substitutes.
///
/// The archive JSON uses both forms interchangeably; resolution treats a
/// bare object exactly like a one-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientSlot {
    /// A single acceptable ingredient
    One(Ingredient),
    /// Any one of several acceptable ingredients
    Many(Vec<Ingredient>),
}

impl IngredientSlot {
    /// Returns the slot's choices as a slice regardless of the JSON form
    pub fn choices(&self) -> &[Ingredient] {
        match self {
            IngredientSlot::One(single) => std::slice::from_ref(single),
            IngredientSlot::Many(list) => list,
        }
    }
}

/// One acceptable ingredient: a concrete item or an item-tag group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    /// A concrete item reference
    Item {
        /// Namespaced item identifier
        item: String,
    },
    /// A reference to an item-tag group
    Tag {
        /// Namespaced tag identifier
        tag: String,
    },
}

/// An item-tag group as stored in the archive.
///
/// Members prefixed with `#` reference another tag; all other members are
/// concrete item identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Ordered member list
    pub values: Vec<String>,
    /// Uninterpreted fields (replace, ...), preserved verbatim
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Tag table: tag name (namespace stripped) to its group definition
pub type TagTable = HashMap<String, TagGroup>;

/// Localization table: display key to human-readable name
pub type LangTable = HashMap<String, String>;

/// Output record for one relevant item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Human-readable display name
    pub name: String,
    /// Embedded data URI, or empty when no icon could be obtained
    pub icon: String,
}

/// Strips the `minecraft:` namespace prefix from an identifier, if present
pub fn strip_namespace(id: &str) -> &str {
    id.strip_prefix("minecraft:").unwrap_or(id)
}
