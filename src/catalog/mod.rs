//! Seed catalog wiring.
//!
//! This module wraps the catalog document (the bundled
//! `catalogs/western_seeds_v1.json` or a replacement on disk) so callers get a
//! validated, merged snapshot with stable identifiers. Types in `model` mirror
//! the document fields; callers use `CatalogRepository` for lookups.

pub mod identity;
pub mod model;
pub mod repository;
pub mod slug;

pub use identity::{CategoryId, Season};
pub use model::{
    CATALOG_SCHEMA_VERSION, CatalogDocument, Category, CategoryDef, Contact, Phone, SeasonDefs,
    SiteInfo, Variety, VarietyDef,
};
pub use repository::{BUNDLED_CATALOG_JSON, CatalogRepository, CategoryTitle, MergePolicy};
pub use slug::{is_valid_slug, slugify};

pub use model::{load_catalog_from_path, parse_catalog};
