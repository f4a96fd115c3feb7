//! Client jar scanning.
//!
//! The jar is opened once and every entry is streamed through a path
//! classifier. Matching entries feed four accumulators: texture files are
//! extracted (flattened to their file name) into the work directory, while
//! recipes, tag groups and the localization table are parsed into memory.
//! The result is returned as an explicit [`ScanOutput`] value; nothing is
//! accumulated in global state.

use crate::error::{Error, Result};
use crate::model::{LangTable, Recipe, TagGroup, TagTable};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, trace};
use zip::ZipArchive;

/// Item texture directory inside the jar
const TEXTURE_ITEM_PREFIX: &str = "assets/minecraft/textures/item/";
/// Block texture directory inside the jar
const TEXTURE_BLOCK_PREFIX: &str = "assets/minecraft/textures/block/";
/// The one GUI texture the downstream crafting view needs
const TEXTURE_GUI_CRAFTING_TABLE: &str =
    "assets/minecraft/textures/gui/container/crafting_table.png";
/// Recipe definition directory inside the jar
const RECIPE_PREFIX: &str = "data/minecraft/recipes/";
/// Item tag definition directory inside the jar
const TAG_PREFIX: &str = "data/minecraft/tags/items/";
/// The localization table entry
const LANG_FILE: &str = "assets/minecraft/lang/en_us.json";

/// Category of a single archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Texture image to extract into the work directory
    Texture,
    /// Candidate recipe definition (still subject to the type filter)
    Recipe,
    /// Item tag group definition
    Tag,
    /// The localization table
    Lang,
    /// Anything else
    Ignore,
}

/// Classifies an archive entry path
pub fn classify(path: &str) -> EntryKind {
    if path.starts_with(TEXTURE_ITEM_PREFIX)
        || path.starts_with(TEXTURE_BLOCK_PREFIX)
        || path == TEXTURE_GUI_CRAFTING_TABLE
    {
        EntryKind::Texture
    } else if path.starts_with(RECIPE_PREFIX) && path.ends_with(".json") {
        EntryKind::Recipe
    } else if path.starts_with(TAG_PREFIX) && path.ends_with(".json") {
        EntryKind::Tag
    } else if path == LANG_FILE {
        EntryKind::Lang
    } else {
        EntryKind::Ignore
    }
}

/// Everything the scan accumulates from one pass over the jar
#[derive(Debug, Default)]
pub struct ScanOutput {
    /// Shaped and shapeless crafting recipes, in archive order
    pub recipes: Vec<Recipe>,
    /// Tag name (file stem) to tag group
    pub tags: TagTable,
    /// Localization table
    pub lang: LangTable,
    /// Number of texture files extracted
    pub textures_extracted: usize,
}

/// Scans the client jar, extracting textures to `<workdir>/minecraft` and
/// accumulating recipes, tags and localization in memory.
pub fn scan_jar(jar_path: &Path, workdir: &Path) -> Result<ScanOutput> {
    let texture_dir = workdir.join("minecraft");
    fs::create_dir_all(&texture_dir).map_err(|e| Error::directory_create(&texture_dir, e))?;

    let file = File::open(jar_path)
        .map_err(|e| Error::archive_open(jar_path, zip::result::ZipError::Io(e)))?;
    let mut jar = ZipArchive::new(file).map_err(|e| Error::archive_open(jar_path, e))?;
    info!("scanning {} ({} entries)", jar_path.display(), jar.len());

    let mut output = ScanOutput::default();
    for index in 0..jar.len() {
        let mut entry = jar
            .by_index(index)
            .map_err(|e| Error::archive_read(format!("#{index}"), e.to_string()))?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();

        match classify(&name) {
            EntryKind::Texture => {
                let target = texture_dir.join(flatten_name(&name));
                let mut out =
                    File::create(&target).map_err(|e| Error::file_write(&target, e))?;
                io::copy(&mut entry, &mut out).map_err(|e| Error::file_write(&target, e))?;
                output.textures_extracted += 1;
            }
            EntryKind::Recipe => {
                // Non-crafting recipe types (smelting, stonecutting, ...)
                // use a different result shape, so the type check happens on
                // the raw value before the typed decode.
                let value: serde_json::Value = serde_json::from_str(&read_entry(&mut entry, &name)?)?;
                let is_crafting = value
                    .get("type")
                    .and_then(|t| t.as_str())
                    .is_some_and(|t| {
                        t == crate::model::TYPE_SHAPED || t == crate::model::TYPE_SHAPELESS
                    });
                if is_crafting {
                    output.recipes.push(serde_json::from_value(value)?);
                } else {
                    trace!("skipping non-crafting recipe {}", name);
                }
            }
            EntryKind::Tag => {
                let group: TagGroup = serde_json::from_str(&read_entry(&mut entry, &name)?)?;
                output.tags.insert(file_stem(&name), group);
            }
            EntryKind::Lang => {
                output.lang = serde_json::from_str(&read_entry(&mut entry, &name)?)?;
            }
            EntryKind::Ignore => {}
        }
    }

    debug!(
        "scan complete: {} recipes, {} tags, {} lang entries, {} textures",
        output.recipes.len(),
        output.tags.len(),
        output.lang.len(),
        output.textures_extracted
    );
    Ok(output)
}

fn read_entry(entry: &mut impl Read, name: &str) -> Result<String> {
    let mut contents = String::new();
    entry
        .read_to_string(&mut contents)
        .map_err(|e| Error::archive_read(name, e.to_string()))?;
    Ok(contents)
}

/// Strips the directory part of an archive path
fn flatten_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Returns the file name without directory or extension
fn file_stem(path: &str) -> String {
    let name = flatten_name(path);
    name.strip_suffix(".json").unwrap_or(name).to_string()
}
