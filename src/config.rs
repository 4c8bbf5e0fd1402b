//! Runtime configuration.
//!
//! Defaults come from the environment and CLI flags override them. Empty
//! environment values count as unset.

use crate::catalog::{CatalogRepository, MergePolicy};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::env::VarError;
use std::path::PathBuf;

pub const ENV_CATALOG_PATH: &str = "SEEDROUTE_CATALOG";
pub const ENV_MERGE_POLICY: &str = "SEEDROUTE_MERGE_POLICY";
pub const ENV_LOG: &str = "SEEDROUTE_LOG";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Catalog document on disk; the bundled catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub merge_policy: MergePolicy,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let catalog_path = env_non_empty(ENV_CATALOG_PATH).map(PathBuf::from);
        let merge_policy = match env_non_empty(ENV_MERGE_POLICY) {
            Some(raw) => raw
                .parse::<MergePolicy>()
                .map_err(|err| anyhow!(err))
                .with_context(|| format!("reading {ENV_MERGE_POLICY}"))?,
            None => MergePolicy::default(),
        };
        Ok(Self {
            catalog_path,
            merge_policy,
        })
    }

    /// Apply CLI flags on top of the environment defaults.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        merge_policy: Option<MergePolicy>,
    ) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = Some(path);
        }
        if let Some(policy) = merge_policy {
            self.merge_policy = policy;
        }
        self
    }

    /// Build the catalog this configuration points at.
    pub fn load_catalog(&self) -> Result<CatalogRepository> {
        match &self.catalog_path {
            Some(path) => CatalogRepository::load(path, self.merge_policy)
                .with_context(|| format!("loading catalog {}", path.display())),
            None => CatalogRepository::bundled(self.merge_policy)
                .context("loading bundled catalog"),
        }
    }
}

pub fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(os.to_string_lossy().into_owned()),
    }
}
