//! JSON Schema gate for catalog documents.
//!
//! The schema is compiled into the binary next to the bundled catalog so a
//! catalog supplied on disk is held to the same contract. Validation runs on
//! the raw JSON value before serde sees it, which keeps error messages
//! pointed at document paths rather than Rust field names.

use crate::error::CatalogError;
use jsonschema::JSONSchema;
use serde_json::Value;

/// Bundled catalog schema source.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/seed_catalog.schema.json");

/// Compiled catalog schema.
pub struct CatalogSchema {
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Compile the schema shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        let schema: Value =
            serde_json::from_str(CATALOG_SCHEMA_JSON).map_err(|source| CatalogError::Parse {
                origin: "<bundled schema>".to_string(),
                source,
            })?;
        Self::compile(&schema, "<bundled schema>")
    }

    pub fn compile(schema: &Value, origin: &str) -> Result<Self, CatalogError> {
        let compiled = JSONSchema::compile(schema).map_err(|err| CatalogError::Schema {
            origin: origin.to_string(),
            details: format!("compiling schema: {err}"),
        })?;
        Ok(Self { compiled })
    }

    /// Validate `instance`, collecting every violation into one error.
    pub fn validate(&self, instance: &Value, origin: &str) -> Result<(), CatalogError> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(CatalogError::Schema {
                origin: origin.to_string(),
                details,
            });
        }
        Ok(())
    }
}
