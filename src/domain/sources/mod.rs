//
// Copyright (c) 2026 Nathan Fiedler
//
use crate::domain::entities::Catalog;
use anyhow::Error;
#[cfg(test)]
use mockall::automock;

/// Data source for the page catalog.
#[cfg_attr(test, automock)]
pub trait CatalogDataSource: Send + Sync {
    /// Produce the catalog as authored, without validation.
    fn load(&self) -> Result<Catalog, Error>;
}
