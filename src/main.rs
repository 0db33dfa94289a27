//
// Copyright (c) 2026 Nathan Fiedler
//

//! The main application binary that loads the catalog and starts the web
//! server for the presentations page.

use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use anyhow::Error;
use lazy_static::lazy_static;
use libmesh_www::data::repositories::CatalogRepositoryImpl;
use libmesh_www::data::sources::{BuiltinCatalogSource, JsonCatalogSource};
use libmesh_www::domain::entities::Catalog;
use libmesh_www::domain::sources::CatalogDataSource;
use libmesh_www::domain::usecases::get_catalog::GetCatalog;
use libmesh_www::domain::usecases::{NoParams, UseCase};
use libmesh_www::preso::leptos::{Chrome, PresentationsPage};
use log::{error, info};
use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

// Assume the cwd is the crate directory.
static DEFAULT_WEB_PATH: &str = "./public/";

lazy_static! {
    // Prefix that locates the shared site assets from the page.
    static ref SITE_ROOT: String = env::var("SITE_ROOT").unwrap_or_default();
    // Path to the static web files.
    static ref STATIC_PATH: PathBuf = {
        let path = env::var("STATIC_FILES").unwrap_or_else(|_| DEFAULT_WEB_PATH.to_owned());
        PathBuf::from(path)
    };
}

/// Everything a request needs to render the page.
struct Site {
    catalog: Arc<Catalog>,
    page: PresentationsPage,
    root: String,
}

// Use the given catalog file (from CATALOG_PATH) if any, otherwise the one
// compiled into the application.
fn load_catalog(path: Option<String>) -> Result<Arc<Catalog>, Error> {
    let source: Arc<dyn CatalogDataSource> = match path {
        Some(path) => {
            info!("using catalog file {}", path);
            Arc::new(JsonCatalogSource::new(path))
        }
        None => Arc::new(BuiltinCatalogSource::new()),
    };
    let repo = CatalogRepositoryImpl::new(source)?;
    let usecase = GetCatalog::new(Box::new(repo));
    usecase.call(NoParams {})
}

async fn presentations(site: web::Data<Site>) -> HttpResponse {
    match site.page.render(&site.catalog, &site.root) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            error!("failed to render presentations page: {:#}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn routes(cfg: &mut web::ServiceConfig, static_path: PathBuf) {
    cfg.route("/presentations.php", web::get().to(presentations))
        .route("/presentations.html", web::get().to(presentations))
        .service(Files::new("/", static_path));
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let catalog = match load_catalog(env::var("CATALOG_PATH").ok()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("unable to load catalog: {:#}", err);
            std::process::exit(1);
        }
    };
    let site = web::Data::new(Site {
        catalog,
        page: PresentationsPage::new(Chrome::site()),
        root: SITE_ROOT.clone(),
    });
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_owned());
    let addr = format!("{}:{}", host, port);
    info!("listening on http://{}/...", addr);
    HttpServer::new(move || {
        App::new()
            .app_data(site.clone())
            .wrap(middleware::Logger::default())
            .configure(|cfg| routes(cfg, STATIC_PATH.clone()))
    })
    .bind(addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http, test, web, App};
    use libmesh_www::preso::leptos::Footer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn site(chrome: Chrome) -> web::Data<Site> {
        let catalog = BuiltinCatalogSource::new().load().unwrap();
        web::Data::new(Site {
            catalog: Arc::new(catalog),
            page: PresentationsPage::new(chrome),
            root: String::new(),
        })
    }

    #[actix_rt::test]
    async fn test_presentations_get() {
        // arrange
        let app = test::init_service(
            App::new()
                .app_data(site(Chrome::site()))
                .configure(|cfg| routes(cfg, PathBuf::from(DEFAULT_WEB_PATH))),
        )
        .await;
        // act
        let req = test::TestRequest::get()
            .uri("/presentations.php")
            .to_request();
        let resp = test::call_service(&app, req).await;
        // assert
        assert!(resp.status().is_success());
        let content_type = resp.headers().get(http::header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<title>libMesh Presentations</title>"));
    }

    struct MissingFooter {}

    impl Footer for MissingFooter {
        fn render(&self) -> Result<leptos::prelude::AnyView, Error> {
            Err(anyhow::anyhow!("footer unavailable"))
        }
    }

    #[actix_rt::test]
    async fn test_presentations_render_error() {
        // arrange
        let mut chrome = Chrome::site();
        chrome.footer = Arc::new(MissingFooter {});
        let app = test::init_service(
            App::new()
                .app_data(site(chrome))
                .configure(|cfg| routes(cfg, PathBuf::from(DEFAULT_WEB_PATH))),
        )
        .await;
        // act
        let req = test::TestRequest::get()
            .uri("/presentations.php")
            .to_request();
        let resp = test::call_service(&app, req).await;
        // assert
        assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_rt::test]
    async fn test_presentations_html_route() {
        // arrange
        let app = test::init_service(
            App::new()
                .app_data(site(Chrome::site()))
                .configure(|cfg| routes(cfg, PathBuf::from(DEFAULT_WEB_PATH))),
        )
        .await;
        // act
        let req = test::TestRequest::get()
            .uri("/presentations.html")
            .to_request();
        let resp = test::call_service(&app, req).await;
        // assert
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<h2>Finite Element Rodeo</h2>"));
    }

    #[actix_rt::test]
    async fn test_static_stylesheet() {
        // arrange
        let app = test::init_service(
            App::new()
                .app_data(site(Chrome::site()))
                .configure(|cfg| routes(cfg, PathBuf::from(DEFAULT_WEB_PATH))),
        )
        .await;
        // act
        let req = test::TestRequest::get().uri("/styles.css").to_request();
        let resp = test::call_service(&app, req).await;
        // assert
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let css = std::str::from_utf8(&body).unwrap();
        assert!(css.contains("#navBar"));
    }

    #[actix_rt::test]
    async fn test_load_builtin_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.sections.len(), 5);
        assert_eq!(catalog.title, "libMesh Presentations");
    }

    #[actix_rt::test]
    async fn test_load_catalog_file() {
        // arrange
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title":"Talks","heading":"Talks","sections":[{{"heading":"Rodeo",
                "items":[{{"kind":"link","text":"a","url":"http://a.org/a.pdf"}}]}}]}}"#
        )
        .unwrap();
        file.flush().unwrap();
        // act
        let path = file.path().to_string_lossy().into_owned();
        let catalog = load_catalog(Some(path)).unwrap();
        // assert
        assert_eq!(catalog.title, "Talks");
        assert_eq!(catalog.sections[0].heading, "Rodeo");
    }

    #[actix_rt::test]
    async fn test_load_catalog_file_missing() {
        let result = load_catalog(Some("no/such/catalog.json".to_owned()));
        assert!(result.is_err());
    }
}
