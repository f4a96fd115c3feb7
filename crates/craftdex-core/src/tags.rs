//! Ingredient resolution over the item-tag graph.
//!
//! Recipe ingredients may name a concrete item or an item-tag group, and a
//! tag group may itself reference other tags (members prefixed with `#`).
//! [`resolve_slot`] expands one ingredient slot into the closed set of
//! concrete item identifiers; [`relevant_items`] applies it across the whole
//! recipe collection.
//!
//! ## Algorithm
//!
//! Expansion is a breadth-first fixed point over the tag reference graph:
//! each round looks up every pending tag, collecting concrete members into
//! the result set and nested references into the next round's pending set,
//! until nothing is pending. The tag graph shipped in the client jar is
//! acyclic; a cycle would loop forever and is not defended against.

use crate::error::{Error, Result};
use crate::model::{strip_namespace, Ingredient, IngredientSlot, Recipe, TagTable, TYPE_SHAPED};
use std::collections::BTreeSet;
use tracing::trace;

/// Marker prefix for a nested tag reference inside a tag group's member list
const TAG_REF_MARKER: char = '#';

/// Expands one ingredient slot into the set of concrete item identifiers
/// that satisfy it.
///
/// A referenced tag absent from the table is a fatal [`Error::MissingTag`]:
/// it means the recipe set and tag set come from mismatched archives.
pub fn resolve_slot(slot: &IngredientSlot, tags: &TagTable) -> Result<BTreeSet<String>> {
    let mut items = BTreeSet::new();
    let mut pending: BTreeSet<String> = BTreeSet::new();

    for choice in slot.choices() {
        match choice {
            Ingredient::Item { item } => {
                items.insert(item.clone());
            }
            Ingredient::Tag { tag } => {
                pending.insert(tag.clone());
            }
        }
    }

    while !pending.is_empty() {
        let mut next = BTreeSet::new();
        for tag in &pending {
            let name = strip_namespace(tag);
            let group = tags.get(name).ok_or_else(|| Error::missing_tag(name))?;
            trace!("expanding tag '{}' ({} members)", name, group.values.len());
            for member in &group.values {
                if let Some(nested) = member.strip_prefix(TAG_REF_MARKER) {
                    next.insert(nested.to_string());
                } else {
                    items.insert(member.clone());
                }
            }
        }
        pending = next;
    }

    Ok(items)
}

/// Collects every concrete item identifier touched by the recipe collection:
/// each recipe's result plus every resolved ingredient choice.
///
/// Only shaped and shapeless recipes reach this function; the archive scan
/// filters out every other recipe type.
pub fn relevant_items(recipes: &[Recipe], tags: &TagTable) -> Result<BTreeSet<String>> {
    let mut items = BTreeSet::new();
    for recipe in recipes {
        items.insert(recipe.result.item.clone());
        if recipe.kind == TYPE_SHAPED {
            if let Some(key) = &recipe.key {
                // Pattern symbols are irrelevant; only the slot values matter.
                for slot in key.values() {
                    items.append(&mut resolve_slot(slot, tags)?);
                }
            }
        } else if let Some(ingredients) = &recipe.ingredients {
            for slot in ingredients {
                items.append(&mut resolve_slot(slot, tags)?);
            }
        }
    }
    Ok(items)
}
