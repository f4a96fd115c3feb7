//! Fixed override tables for icon resolution.
//!
//! These are data, not logic: curated exceptions for items whose icon cannot
//! be derived mechanically from the identifier. Extend the tables here; the
//! resolver in [`crate::icon`] never special-cases individual identifiers.

use phf::{phf_map, phf_set};

/// Blocks whose best inventory icon is their flat item-form texture rather
/// than the wiki's 3-D render: doors, rails, candles, torches, flowers and
/// other objects drawn as 2-D sprites in the inventory.
pub static FORCE_ASSET: phf::Set<&'static str> = phf_set! {
    "minecraft:acacia_door", "minecraft:activator_rail", "minecraft:bamboo",
    "minecraft:birch_door", "minecraft:black_candle", "minecraft:blue_candle",
    "minecraft:blue_orchid", "minecraft:brown_candle", "minecraft:brown_mushroom",
    "minecraft:campfire", "minecraft:candle", "minecraft:clock",
    "minecraft:cornflower", "minecraft:crimson_door", "minecraft:cyan_candle",
    "minecraft:dandelion", "minecraft:dark_oak_door", "minecraft:detector_rail",
    "minecraft:gray_candle", "minecraft:green_candle", "minecraft:iron_bars",
    "minecraft:iron_door", "minecraft:ladder", "minecraft:lever",
    "minecraft:light_blue_candle", "minecraft:light_gray_candle", "minecraft:lilac",
    "minecraft:lily_of_the_valley", "minecraft:lime_candle", "minecraft:magenta_candle",
    "minecraft:oak_door", "minecraft:orange_candle", "minecraft:orange_tulip",
    "minecraft:oxeye_daisy", "minecraft:peony", "minecraft:pink_candle",
    "minecraft:pink_tulip", "minecraft:pointed_dripstone", "minecraft:poppy",
    "minecraft:powered_rail", "minecraft:purple_candle", "minecraft:rail",
    "minecraft:red_mushroom", "minecraft:red_tulip", "minecraft:redstone_torch",
    "minecraft:rose_bush", "minecraft:soul_campfire", "minecraft:soul_torch",
    "minecraft:spruce_door", "minecraft:sugar_cane", "minecraft:sunflower",
    "minecraft:torch", "minecraft:tripwire_hook", "minecraft:vine",
    "minecraft:warped_fungus", "minecraft:white_candle", "minecraft:white_tulip",
    "minecraft:wither_rose", "minecraft:yellow_candle", "minecraft:cake",
    "minecraft:azure_bluet", "minecraft:jungle_door", "minecraft:red_candle",
    "minecraft:warped_door",
};

/// Items whose flat texture is a poor icon; these always go through the wiki
/// even when looked up as items.
pub static FORCE_WIKI: phf::Set<&'static str> = phf_set! {
    "minecraft:enchanted_golden_apple",
};

/// Items whose canonical texture file name differs from the identifier
/// (animation frames, rotated sprites, alternate resolutions).
pub static ASSET_RENAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "minecraft:compass" => "compass_16",
    "minecraft:sunflower" => "sunflower_front",
    "minecraft:lilac" => "lilac_front",
    "minecraft:peony" => "peony_top",
    "minecraft:rose_bush" => "rose_bush_top",
    "minecraft:crossbow" => "crossbow_pulling_0",
};

/// Blocks whose wiki page title differs from the in-game display name,
/// mostly the oxidized/waxed copper family.
pub static WIKI_RENAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Block of Copper" => "Copper Block",
    "Exposed Copper" => "Exposed Copper Block",
    "Oxidized Copper" => "Oxidized Copper Block",
    "Waxed Block of Copper" => "Copper Block",
    "Waxed Cut Copper" => "Cut Copper",
    "Waxed Exposed Copper" => "Exposed Copper Block",
    "Waxed Exposed Cut Copper" => "Exposed Cut Copper",
    "Waxed Oxidized Copper" => "Oxidized Copper Block",
    "Waxed Oxidized Cut Copper" => "Oxidized Cut Copper",
    "Waxed Weathered Copper" => "Weathered Copper Block",
    "Waxed Weathered Cut Copper" => "Weathered Cut Copper",
    "Weathered Copper" => "Weathered Copper Block",
    "Waxed Cut Copper Slab" => "Cut Copper Slab",
    "Waxed Cut Copper Stairs" => "Cut Copper Stairs",
    "Waxed Exposed Cut Copper Slab" => "Cut Copper Slab",
    "Waxed Exposed Cut Copper Stairs" => "Cut Copper Stairs",
    "Waxed Oxidized Cut Copper Slab" => "Cut Copper Slab",
    "Waxed Oxidized Cut Copper Stairs" => "Cut Copper Stairs",
    "Waxed Weathered Cut Copper Slab" => "Cut Copper Slab",
    "Waxed Weathered Cut Copper Stairs" => "Cut Copper Stairs",
};
