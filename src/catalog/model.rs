//! Catalog document types and the validated runtime records built from them.

use crate::catalog::{CategoryId, Season};
use crate::error::CatalogError;
use crate::schema_loader::CatalogSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version marker every catalog document must carry.
pub const CATALOG_SCHEMA_VERSION: &str = "seed_catalog_v1";

#[derive(Clone, Debug, Deserialize)]
/// Raw catalog document as stored in `catalogs/`.
pub struct CatalogDocument {
    pub schema_version: String,
    #[serde(default)]
    pub site: SiteInfo,
    pub seasons: SeasonDefs,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SeasonDefs {
    #[serde(default)]
    pub winter: Vec<CategoryDef>,
    #[serde(default)]
    pub spring: Vec<CategoryDef>,
}

impl SeasonDefs {
    pub fn for_season(&self, season: Season) -> &[CategoryDef] {
        match season {
            Season::Winter => &self.winter,
            Season::Spring => &self.spring,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub title: String,
    pub varieties: Vec<VarietyDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VarietyDef {
    pub name: String,
    #[serde(default)]
    pub org_note: Option<String>,
    #[serde(default)]
    pub agronomic: Vec<String>,
    #[serde(default)]
    pub disease: Vec<String>,
    /// Explicit slug; derived from `name` when absent.
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Static contact directory shown on the contacts page.
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A single seed variety. The slug is always populated.
pub struct Variety {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_note: Option<String>,
    pub agronomic: Vec<String>,
    pub disease: Vec<String>,
    pub slug: String,
}

impl Variety {
    /// Display label: the name followed by the organizational note, if any.
    pub fn label(&self) -> String {
        match &self.org_note {
            Some(note) if !note.trim().is_empty() => format!("{} {}", self.name, note.trim()),
            _ => self.name.clone(),
        }
    }

    /// Split the label into a title and a trailing parenthesized note.
    ///
    /// `"Dayn (Washington State University)"` yields `("Dayn",
    /// Some("Washington State University"))`. Labels that do not end in `)`
    /// are returned whole.
    pub fn heading(&self) -> (String, Option<String>) {
        split_title_note(&self.label())
    }
}

fn split_title_note(label: &str) -> (String, Option<String>) {
    let trimmed = label.trim_end();
    if let Some(body) = trimmed.strip_suffix(')') {
        if let Some(open) = body.find('(') {
            let note = &body[open + 1..];
            if !note.is_empty() && !note.contains('\n') {
                return (body[..open].trim_end().to_string(), Some(note.to_string()));
            }
        }
    }
    (label.to_string(), None)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub season: Season,
    pub varieties: Vec<Variety>,
}

/// Parse and schema-check a catalog document from text.
///
/// `origin` names the source in error messages (a path or `<bundled>`).
pub fn parse_catalog(text: &str, origin: &str) -> Result<CatalogDocument, CatalogError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    // Report a wrong marker directly instead of as a schema `const` failure.
    if let Some(found) = value.get("schema_version").and_then(|v| v.as_str()) {
        if found != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion {
                found: found.to_string(),
                expected: CATALOG_SCHEMA_VERSION,
            });
        }
    }

    CatalogSchema::bundled()?.validate(&value, origin)?;

    serde_json::from_value(value).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_catalog_from_path(path: &Path) -> Result<CatalogDocument, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&text, &path.display().to_string())
}
