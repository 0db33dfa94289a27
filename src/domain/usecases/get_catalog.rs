//
// Copyright (c) 2026 Nathan Fiedler
//
use crate::domain::entities::Catalog;
use crate::domain::repositories::CatalogRepository;
use crate::domain::usecases::NoParams;
use anyhow::Error;
use std::sync::Arc;

pub struct GetCatalog {
    repo: Box<dyn CatalogRepository>,
}

impl GetCatalog {
    pub fn new(repo: Box<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

impl super::UseCase<Arc<Catalog>, NoParams> for GetCatalog {
    fn call(&self, _params: NoParams) -> Result<Arc<Catalog>, Error> {
        self.repo.get_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::super::UseCase;
    use super::*;
    use crate::domain::entities::{LinkEntry, Section};
    use crate::domain::repositories::MockCatalogRepository;
    use anyhow::anyhow;

    #[test]
    fn test_get_catalog_ok() {
        // arrange
        let catalog = Arc::new(Catalog {
            title: "libMesh Presentations".into(),
            heading: "Presentations".into(),
            sections: vec![Section::new(
                "Finite Element Rodeo",
                vec![LinkEntry::new("Rodeo", "http://example.com/rodeo.pdf").into()],
            )],
        });
        let expected = catalog.clone();
        let mut mock = MockCatalogRepository::new();
        mock.expect_get_catalog()
            .returning(move || Ok(catalog.clone()));
        // act
        let usecase = GetCatalog::new(Box::new(mock));
        let params = NoParams {};
        let result = usecase.call(params);
        // assert
        assert!(result.is_ok());
        let actual = result.unwrap();
        assert_eq!(actual, expected);
        assert_eq!(actual.sections[0].heading, "Finite Element Rodeo");
    }

    #[test]
    fn test_get_catalog_err() {
        // arrange
        let mut mock = MockCatalogRepository::new();
        mock.expect_get_catalog().returning(|| Err(anyhow!("oh no")));
        // act
        let usecase = GetCatalog::new(Box::new(mock));
        let params = NoParams {};
        let result = usecase.call(params);
        // assert
        assert!(result.is_err());
    }
}
