//! # craftdex-core
//!
//! A library for extracting crafting-recipe metadata from a Minecraft
//! client jar into a small set of static JSON files.
//!
//! This crate provides the core functionality for:
//! - Scanning the client jar for recipes, item tags, textures and the
//!   localization table
//! - Expanding recipe ingredients through the (possibly nested) item-tag
//!   graph into concrete item identifiers
//! - Resolving an icon for every relevant item, either from an extracted
//!   texture or from the block's wiki page render
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`archive`]: jar entry classification and the single scan pass
//! - [`tags`]: ingredient resolution over the tag graph
//! - [`icon`]: icon resolution strategies and the HTTP transport seam
//! - [`wiki`]: wiki page scanning for block render images
//! - [`overrides`]: fixed override tables (data, not logic)
//! - [`pipeline`]: orchestration and output file writing
//! - [`error`]: error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use craftdex_core::Pipeline;
//!
//! let pipeline = Pipeline::new("minecraft-1.18.1-client.jar", "static", "tmp");
//! let summary = pipeline.run()?;
//! println!("{} items extracted", summary.items);
//! # Ok::<(), craftdex_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod archive;
pub mod error;
pub mod icon;
pub mod model;
pub mod overrides;
pub mod pipeline;
pub mod tags;
pub mod wiki;

// Re-export primary types for convenience
pub use archive::{classify, scan_jar, EntryKind, ScanOutput};
pub use error::{Error, Result};
pub use icon::{Fetcher, HttpFetcher, IconResolver};
pub use model::{Ingredient, IngredientSlot, ItemRecord, Recipe, TagGroup, TagTable};
pub use pipeline::{Pipeline, RunSummary};
pub use tags::{relevant_items, resolve_slot};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
