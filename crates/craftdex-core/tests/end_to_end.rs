//! End-to-end pipeline tests over a synthetic client jar.
//!
//! Each test builds a small jar on disk, runs the full pipeline with an
//! offline transport, and inspects the three JSON artifacts.

use craftdex_core::icon::{FetchFailure, Fetcher};
use craftdex_core::pipeline::{ITEMS_FILE, RECIPES_FILE, TAGS_FILE};
use craftdex_core::{Error, Pipeline};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Panics on any network access; pipelines under test must stay offline
struct NoNetwork;

impl Fetcher for NoNetwork {
    fn fetch_page(&self, url: &str) -> Result<String, FetchFailure> {
        panic!("unexpected page fetch: {url}");
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchFailure> {
        panic!("unexpected image fetch: {url}");
    }
}

/// Serves one canned page for every URL and a fixed image body
struct CannedWiki {
    page: String,
}

impl Fetcher for CannedWiki {
    fn fetch_page(&self, _url: &str) -> Result<String, FetchFailure> {
        Ok(self.page.clone())
    }

    fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>, FetchFailure> {
        Ok(b"render-bytes".to_vec())
    }
}

fn write_jar(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}

fn read_json(dir: &Path, file: &str) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.join(file)).unwrap()).unwrap()
}

#[test]
fn minimal_jar_produces_all_three_files() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("client.jar");
    let recipe = json!({
        "type": "minecraft:crafting_shapeless",
        "ingredients": [{"item": "minecraft:stick"}, {"item": "minecraft:coal"}],
        "result": {"item": "minecraft:torch", "count": 4}
    });
    let lang = json!({
        "item.minecraft.stick": "Stick",
        "item.minecraft.coal": "Coal",
        "item.minecraft.torch": "Torch"
    });
    write_jar(
        &jar,
        &[
            (
                "data/minecraft/recipes/torch.json",
                recipe.to_string().into_bytes(),
            ),
            (
                "assets/minecraft/lang/en_us.json",
                lang.to_string().into_bytes(),
            ),
            (
                "assets/minecraft/textures/item/stick.png",
                b"stick-png".to_vec(),
            ),
            (
                "assets/minecraft/textures/item/coal.png",
                b"coal-png".to_vec(),
            ),
            (
                "assets/minecraft/textures/item/torch.png",
                b"torch-png".to_vec(),
            ),
        ],
    );

    let output = dir.path().join("static");
    let pipeline = Pipeline::new(&jar, &output, dir.path().join("tmp"));
    let summary = pipeline.run_with_fetcher(NoNetwork).unwrap();
    assert_eq!(summary.recipes, 1);
    assert_eq!(summary.items, 3);

    // Recipes file: exactly the one recipe object, verbatim.
    let recipes = read_json(&output, RECIPES_FILE);
    assert_eq!(recipes, json!([recipe]));

    let tags = read_json(&output, TAGS_FILE);
    assert_eq!(tags, json!({}));

    let items = read_json(&output, ITEMS_FILE);
    let items = items.as_object().unwrap();
    assert_eq!(items.len(), 3);
    for (id, display) in [
        ("minecraft:stick", "Stick"),
        ("minecraft:coal", "Coal"),
        ("minecraft:torch", "Torch"),
    ] {
        assert_eq!(items[id]["name"], display);
        let icon = items[id]["icon"].as_str().unwrap();
        assert!(
            icon.starts_with("data:image/png;base64,"),
            "bad icon for {id}: {icon:?}"
        );
    }

    // Pretty-printed with two-space indentation.
    let raw = fs::read_to_string(output.join(ITEMS_FILE)).unwrap();
    assert!(raw.contains("\n  \""));
}

#[test]
fn tag_ingredients_resolve_through_nesting() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("client.jar");
    write_jar(
        &jar,
        &[
            (
                "data/minecraft/recipes/campfire.json",
                json!({
                    "type": "minecraft:crafting_shaped",
                    "pattern": ["#"],
                    "key": {"#": {"tag": "minecraft:coals"}},
                    "result": {"item": "minecraft:campfire"}
                })
                .to_string()
                .into_bytes(),
            ),
            (
                "data/minecraft/tags/items/coals.json",
                json!({"values": ["#minecraft:fuels"]}).to_string().into_bytes(),
            ),
            (
                "data/minecraft/tags/items/fuels.json",
                json!({"values": ["minecraft:coal"]}).to_string().into_bytes(),
            ),
            (
                "assets/minecraft/lang/en_us.json",
                json!({
                    "item.minecraft.coal": "Coal",
                    "item.minecraft.campfire": "Campfire"
                })
                .to_string()
                .into_bytes(),
            ),
            (
                "assets/minecraft/textures/item/coal.png",
                b"coal-png".to_vec(),
            ),
            (
                "assets/minecraft/textures/item/campfire.png",
                b"campfire-png".to_vec(),
            ),
        ],
    );

    let output = dir.path().join("static");
    let pipeline = Pipeline::new(&jar, &output, dir.path().join("tmp"));
    let summary = pipeline.run_with_fetcher(NoNetwork).unwrap();

    assert_eq!(summary.items, 2);
    let items = read_json(&output, ITEMS_FILE);
    assert!(items.get("minecraft:coal").is_some());
    // The intermediate tag names never become items.
    assert!(items.get("minecraft:coals").is_none());
    assert!(items.get("minecraft:fuels").is_none());
}

#[test]
fn block_items_resolve_icons_from_the_wiki() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("client.jar");
    write_jar(
        &jar,
        &[
            (
                "data/minecraft/recipes/furnace.json",
                json!({
                    "type": "minecraft:crafting_shapeless",
                    "ingredients": [{"item": "minecraft:furnace"}],
                    "result": {"item": "minecraft:furnace"}
                })
                .to_string()
                .into_bytes(),
            ),
            (
                "assets/minecraft/lang/en_us.json",
                json!({"block.minecraft.furnace": "Furnace"})
                    .to_string()
                    .into_bytes(),
            ),
        ],
    );

    let fetcher = CannedWiki {
        page: r#"<div class="infobox-imagearea"><img alt="Furnace.png" src="https://img.example/Furnace.png/revision/160"></div>"#.to_string(),
    };
    let output = dir.path().join("static");
    let pipeline = Pipeline::new(&jar, &output, dir.path().join("tmp"));
    pipeline.run_with_fetcher(fetcher).unwrap();

    let items = read_json(&output, ITEMS_FILE);
    assert_eq!(items["minecraft:furnace"]["name"], "Furnace");
    let icon = items["minecraft:furnace"]["icon"].as_str().unwrap();
    assert!(icon.starts_with("data:image/png;base64,"));
}

#[test]
fn missing_name_aborts_after_recipes_and_tags_are_written() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("client.jar");
    write_jar(
        &jar,
        &[
            (
                "data/minecraft/recipes/torch.json",
                json!({
                    "type": "minecraft:crafting_shapeless",
                    "ingredients": [{"item": "minecraft:stick"}],
                    "result": {"item": "minecraft:torch"}
                })
                .to_string()
                .into_bytes(),
            ),
            (
                "assets/minecraft/lang/en_us.json",
                json!({"item.minecraft.torch": "Torch"}).to_string().into_bytes(),
            ),
        ],
    );

    let output = dir.path().join("static");
    let pipeline = Pipeline::new(&jar, &output, dir.path().join("tmp"));
    let result = pipeline.run_with_fetcher(NoNetwork);

    match result {
        Err(Error::MissingName { id }) => assert_eq!(id, "minecraft:stick"),
        other => panic!("expected MissingName, got {other:?}"),
    }

    // recipes/tags are written before icon resolution; items never appears.
    assert!(output.join(RECIPES_FILE).is_file());
    assert!(output.join(TAGS_FILE).is_file());
    assert!(!output.join(ITEMS_FILE).exists());
}

#[test]
fn missing_tag_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("client.jar");
    write_jar(
        &jar,
        &[
            (
                "data/minecraft/recipes/torch.json",
                json!({
                    "type": "minecraft:crafting_shapeless",
                    "ingredients": [{"tag": "minecraft:coals"}],
                    "result": {"item": "minecraft:torch"}
                })
                .to_string()
                .into_bytes(),
            ),
            (
                "assets/minecraft/lang/en_us.json",
                json!({"item.minecraft.torch": "Torch"}).to_string().into_bytes(),
            ),
        ],
    );

    let pipeline = Pipeline::new(
        &jar,
        dir.path().join("static"),
        dir.path().join("tmp"),
    );
    let result = pipeline.run_with_fetcher(NoNetwork);
    assert!(matches!(result, Err(Error::MissingTag { .. })));
}
