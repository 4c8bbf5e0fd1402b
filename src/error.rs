//! Configuration errors raised while building the catalog.
//!
//! Every variant is fatal: a catalog that fails any of these checks never
//! reaches the route resolver. Lookups that miss (unknown group, unknown
//! variety) are not errors and never surface here.

use crate::catalog::Season;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog {origin} failed schema validation:\n{details}")]
    Schema { origin: String, details: String },

    #[error("unsupported catalog schema_version '{found}', expected {expected}")]
    SchemaVersion { found: String, expected: &'static str },

    #[error("duplicate category id '{id}' in {season} season")]
    DuplicateCategory { season: Season, id: String },

    #[error("category '{id}' has no varieties")]
    EmptyCategory { id: String },

    #[error("category '{category}' has a blank {field}")]
    BlankField {
        category: String,
        field: &'static str,
    },

    #[error("variety '{name}' in category '{category}' yields an empty slug")]
    EmptySlug { category: String, name: String },

    #[error("invalid {what} '{value}': must be lowercase kebab-case")]
    InvalidSlug { what: &'static str, value: String },

    #[error("duplicate slug '{slug}' in category '{category}' ('{first}' and '{second}')")]
    DuplicateSlug {
        category: String,
        slug: String,
        first: String,
        second: String,
    },
}
