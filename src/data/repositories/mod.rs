//
// Copyright (c) 2026 Nathan Fiedler
//
use crate::domain::entities::Catalog;
use crate::domain::repositories::CatalogRepository;
use crate::domain::sources::CatalogDataSource;
use anyhow::{Context, Error};
use log::info;
use std::sync::Arc;

// The catalog is loaded and validated once, when the repository is built, and
// shared read-only from then on.
pub struct CatalogRepositoryImpl {
    catalog: Arc<Catalog>,
}

impl CatalogRepositoryImpl {
    pub fn new(datasource: Arc<dyn CatalogDataSource>) -> Result<Self, Error> {
        let catalog = datasource.load()?;
        catalog.validate().context("catalog failed validation")?;
        info!(
            "catalog loaded: sections: {}, links: {}",
            catalog.sections.len(),
            catalog.visible_links().len()
        );
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }
}

impl CatalogRepository for CatalogRepositoryImpl {
    fn get_catalog(&self) -> Result<Arc<Catalog>, Error> {
        Ok(self.catalog.clone())
    }
}
