//! Immutable, merged view of the seed catalog.
//!
//! The repository is built once from a [`CatalogDocument`] and never mutated
//! afterwards. Construction is strict: duplicate slugs inside a category,
//! empty slugs, duplicate ids within a season and empty categories all abort
//! the build rather than being silently collapsed.

use crate::catalog::model::{CategoryDef, VarietyDef, load_catalog_from_path, parse_catalog};
use crate::catalog::slug::{slugify, validate_slug};
use crate::catalog::{Category, CatalogDocument, CategoryId, Season, SiteInfo, Variety};
use crate::error::CatalogError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Catalog compiled into the crate.
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../../catalogs/western_seeds_v1.json");

/// How a category id defined in both seasons is resolved in the merged view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Keep the winter definition.
    FirstWins,
    /// Replace the winter definition with the spring one.
    #[default]
    LastWins,
}

impl MergePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergePolicy::FirstWins => "first-wins",
            MergePolicy::LastWins => "last-wins",
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-wins" => Ok(MergePolicy::FirstWins),
            "last-wins" => Ok(MergePolicy::LastWins),
            other => Err(format!(
                "unknown merge policy '{other}'; expected first-wins or last-wins"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Entry in a season's ordered title listing.
pub struct CategoryTitle {
    pub id: CategoryId,
    pub title: String,
}

#[derive(Debug)]
pub struct CatalogRepository {
    categories: Vec<Category>,
    by_id: HashMap<CategoryId, usize>,
    titles: BTreeMap<Season, Vec<CategoryTitle>>,
    site: SiteInfo,
    policy: MergePolicy,
}

impl CatalogRepository {
    /// Build from the catalog compiled into the crate.
    pub fn bundled(policy: MergePolicy) -> Result<Self, CatalogError> {
        let document = parse_catalog(BUNDLED_CATALOG_JSON, "<bundled>")?;
        Self::from_document(document, policy)
    }

    /// Build from a catalog document on disk.
    pub fn load(path: &Path, policy: MergePolicy) -> Result<Self, CatalogError> {
        let document = load_catalog_from_path(path)?;
        Self::from_document(document, policy)
    }

    pub fn from_document(
        document: CatalogDocument,
        policy: MergePolicy,
    ) -> Result<Self, CatalogError> {
        let mut categories: Vec<Category> = Vec::new();
        let mut by_id: HashMap<CategoryId, usize> = HashMap::new();
        let mut titles: BTreeMap<Season, Vec<CategoryTitle>> = BTreeMap::new();

        for season in Season::ALL {
            let built = build_season(season, document.seasons.for_season(season))?;
            titles.insert(
                season,
                built
                    .iter()
                    .map(|category| CategoryTitle {
                        id: category.id.clone(),
                        title: category.title.clone(),
                    })
                    .collect(),
            );

            for category in built {
                match by_id.get(&category.id).copied() {
                    None => {
                        by_id.insert(category.id.clone(), categories.len());
                        categories.push(category);
                    }
                    Some(slot) => {
                        let kept = match policy {
                            MergePolicy::FirstWins => categories[slot].season,
                            MergePolicy::LastWins => category.season,
                        };
                        warn!(
                            id = %category.id,
                            kept = %kept,
                            policy = %policy,
                            "category defined in more than one season"
                        );
                        if policy == MergePolicy::LastWins {
                            categories[slot] = category;
                        }
                    }
                }
            }
        }

        let repository = Self {
            categories,
            by_id,
            titles,
            site: document.site,
            policy,
        };
        info!(
            categories = repository.categories.len(),
            varieties = repository.variety_count(),
            policy = %policy,
            "catalog built"
        );
        Ok(repository)
    }

    /// Ordered id → title listing for one season, in definition order.
    ///
    /// Ids shared between seasons appear in both listings regardless of the
    /// merge policy.
    pub fn category_titles(&self, season: Season) -> &[CategoryTitle] {
        self.titles.get(&season).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Varieties of a category in definition order; empty for unknown ids.
    pub fn varieties_of(&self, category_id: &str) -> &[Variety] {
        self.category(category_id)
            .map(|category| category.varieties.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_variety(&self, category_id: &str, slug: &str) -> Option<&Variety> {
        self.varieties_of(category_id)
            .iter()
            .find(|variety| variety.slug == slug)
    }

    /// Category that owns `slug`, searched only within the caller's category
    /// context.
    ///
    /// Slugs are unique per category but not across categories (`forerunner`
    /// exists in both triticale seasons), so a global reverse lookup would be
    /// ambiguous. Returns the context id when it holds the slug.
    pub fn category_of(&self, context: &str, slug: &str) -> Option<&CategoryId> {
        let category = self.category(context)?;
        category
            .varieties
            .iter()
            .any(|variety| variety.slug == slug)
            .then_some(&category.id)
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.by_id
            .get(category_id)
            .map(|&slot| &self.categories[slot])
    }

    pub fn title_of(&self, category_id: &str) -> Option<&str> {
        self.category(category_id)
            .map(|category| category.title.as_str())
    }

    /// Merged categories: winter definitions first, then spring-only ids.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn variety_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.varieties.len())
            .sum()
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.policy
    }
}

fn build_season(season: Season, defs: &[CategoryDef]) -> Result<Vec<Category>, CatalogError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut built = Vec::with_capacity(defs.len());
    for def in defs {
        validate_slug("category id", &def.id)?;
        if !seen.insert(def.id.as_str()) {
            return Err(CatalogError::DuplicateCategory {
                season,
                id: def.id.clone(),
            });
        }
        built.push(build_category(season, def)?);
    }
    Ok(built)
}

fn build_category(season: Season, def: &CategoryDef) -> Result<Category, CatalogError> {
    if def.title.trim().is_empty() {
        return Err(CatalogError::BlankField {
            category: def.id.clone(),
            field: "title",
        });
    }
    if def.varieties.is_empty() {
        return Err(CatalogError::EmptyCategory { id: def.id.clone() });
    }

    // slug -> name of the variety that claimed it
    let mut slugs: BTreeMap<String, &str> = BTreeMap::new();
    let mut varieties = Vec::with_capacity(def.varieties.len());
    for variety in &def.varieties {
        let built = build_variety(&def.id, variety)?;
        if let Some(first) = slugs.insert(built.slug.clone(), variety.name.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                category: def.id.clone(),
                slug: built.slug,
                first: first.to_string(),
                second: variety.name.clone(),
            });
        }
        varieties.push(built);
    }

    Ok(Category {
        id: CategoryId::new(def.id.clone()),
        title: def.title.clone(),
        season,
        varieties,
    })
}

fn build_variety(category: &str, def: &VarietyDef) -> Result<Variety, CatalogError> {
    if def.name.trim().is_empty() {
        return Err(CatalogError::BlankField {
            category: category.to_string(),
            field: "variety name",
        });
    }
    let slug = match &def.slug {
        Some(explicit) => {
            validate_slug("slug override", explicit)?;
            explicit.clone()
        }
        None => {
            let derived = slugify(&def.name);
            if derived.is_empty() {
                return Err(CatalogError::EmptySlug {
                    category: category.to_string(),
                    name: def.name.clone(),
                });
            }
            derived
        }
    };
    Ok(Variety {
        name: def.name.clone(),
        org_note: def.org_note.clone(),
        agronomic: def.agronomic.clone(),
        disease: def.disease.clone(),
        slug,
    })
}
