//
// Copyright (c) 2026 Nathan Fiedler
//
use crate::domain::entities::Catalog;
use anyhow::Error;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

///
/// Repository for the validated page catalog.
///
#[cfg_attr(test, automock)]
pub trait CatalogRepository: Send + Sync {
    /// Retrieve the shared catalog that the page is rendered from.
    fn get_catalog(&self) -> Result<Arc<Catalog>, Error>;
}
