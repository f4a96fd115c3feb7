//! Pipeline orchestration.
//!
//! One run: scan the jar, write the recipes and tags files, resolve names
//! and icons for every relevant item, write the items file. The recipes and
//! tags files are deliberately written before icon resolution starts, so an
//! aborted run can leave those two behind without an items file; the items
//! file itself only appears after every item resolved.

use crate::archive::{self, ScanOutput};
use crate::error::{Error, Result};
use crate::icon::{Fetcher, HttpFetcher, IconResolver};
use crate::model::{strip_namespace, ItemRecord};
use crate::tags::relevant_items;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name for the raw recipe array
pub const RECIPES_FILE: &str = "recipes.json";
/// File name for the tag name to tag group mapping
pub const TAGS_FILE: &str = "tags.json";
/// File name for the item identifier to name/icon mapping
pub const ITEMS_FILE: &str = "items.json";

/// Counters reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Crafting recipes written to the recipes file
    pub recipes: usize,
    /// Tag groups written to the tags file
    pub tags: usize,
    /// Relevant items written to the items file
    pub items: usize,
    /// Texture files extracted into the work directory
    pub textures: usize,
}

/// A configured extraction run
#[derive(Debug, Clone)]
pub struct Pipeline {
    jar_path: PathBuf,
    output_dir: PathBuf,
    workdir: PathBuf,
}

impl Pipeline {
    /// Creates a pipeline reading `jar_path`, writing JSON artifacts into
    /// `output_dir` and texture files under `workdir`
    pub fn new(
        jar_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            jar_path: jar_path.into(),
            output_dir: output_dir.into(),
            workdir: workdir.into(),
        }
    }

    /// Runs the pipeline with the default blocking HTTP transport
    pub fn run(&self) -> Result<RunSummary> {
        self.run_with_fetcher(HttpFetcher)
    }

    /// Runs the pipeline with a custom transport (tests use a stub)
    pub fn run_with_fetcher<F: Fetcher>(&self, fetcher: F) -> Result<RunSummary> {
        let scan = archive::scan_jar(&self.jar_path, &self.workdir)?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| Error::directory_create(&self.output_dir, e))?;
        self.write_json(RECIPES_FILE, &scan.recipes, false)?;
        // Sorted for a stable file across runs; HashMap order is not.
        let tags_sorted: BTreeMap<_, _> = scan.tags.iter().collect();
        self.write_json(TAGS_FILE, &tags_sorted, false)?;

        let items = self.resolve_items(&scan, fetcher)?;
        self.write_json(ITEMS_FILE, &items, true)?;

        let summary = RunSummary {
            recipes: scan.recipes.len(),
            tags: scan.tags.len(),
            items: items.len(),
            textures: scan.textures_extracted,
        };
        info!(
            "wrote {} recipes, {} tags, {} items to {}",
            summary.recipes,
            summary.tags,
            summary.items,
            self.output_dir.display()
        );
        Ok(summary)
    }

    /// Resolves a display name and icon for every relevant item.
    ///
    /// An item identifier is looked up as an item key first, then as a block
    /// key; the key kind also selects the icon strategy. Neither key present
    /// is fatal: the archive's recipes and localization disagree.
    fn resolve_items<F: Fetcher>(
        &self,
        scan: &ScanOutput,
        fetcher: F,
    ) -> Result<BTreeMap<String, ItemRecord>> {
        let relevant = relevant_items(&scan.recipes, &scan.tags)?;
        debug!("{} relevant items", relevant.len());

        let resolver = IconResolver::new(&self.workdir, fetcher);
        let mut items = BTreeMap::new();
        for id in relevant {
            let short = strip_namespace(&id);
            let record = if let Some(name) = scan.lang.get(&format!("item.minecraft.{short}")) {
                ItemRecord {
                    name: name.clone(),
                    icon: resolver.item_icon(&id, name)?,
                }
            } else if let Some(name) = scan.lang.get(&format!("block.minecraft.{short}")) {
                ItemRecord {
                    name: name.clone(),
                    icon: resolver.block_icon(&id, name)?,
                }
            } else {
                return Err(Error::missing_name(&id));
            };
            items.insert(id, record);
        }
        Ok(items)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T, pretty: bool) -> Result<()> {
        let path = self.output_dir.join(file);
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        fs::write(&path, json).map_err(|e| Error::file_write(&path, e))?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    /// The configured output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
