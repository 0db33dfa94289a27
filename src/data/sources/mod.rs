//
// Copyright (c) 2026 Nathan Fiedler
//

//! Sources from which the page catalog can be loaded.

use crate::domain::entities::Catalog;
use crate::domain::sources::CatalogDataSource;
use anyhow::{Context, Error};
use log::debug;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

mod builtin;

/// Catalog compiled into the application.
#[derive(Default)]
pub struct BuiltinCatalogSource {}

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self {}
    }
}

impl CatalogDataSource for BuiltinCatalogSource {
    fn load(&self) -> Result<Catalog, Error> {
        debug!("loading built-in catalog");
        Ok(builtin::CATALOG.clone())
    }
}

/// Catalog read from a JSON file.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogDataSource for JsonCatalogSource {
    fn load(&self) -> Result<Catalog, Error> {
        debug!("loading catalog from {}", self.path.display());
        let file = fs::File::open(&self.path)
            .with_context(|| format!("JsonCatalogSource::load open({})", self.path.display()))?;
        let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("JsonCatalogSource::load parse({})", self.path.display()))?;
        Ok(catalog)
    }
}
