use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use eyre::WrapErr;
use tower_http::cors::{Any, CorsLayer};

use bedside_scores::Catalog;

/// Points at a JSON catalog resource to serve instead of the built-in one.
pub const CATALOG_PATH_VAR: &str = "BEDSIDE_CATALOG_PATH";
/// Restricts CORS to a single origin. Any origin when unset.
pub const CORS_ORIGIN_VAR: &str = "BEDSIDE_CORS_ORIGIN";

#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub catalog_path: Option<PathBuf>,
    pub cors_origin: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var_os(CATALOG_PATH_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            cors_origin: env::var(CORS_ORIGIN_VAR).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Load the catalog this process will serve. Fails if the resource is
    /// unreadable or does not validate.
    pub fn load_catalog(&self) -> eyre::Result<Arc<Catalog>> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_path(path)
                    .wrap_err_with(|| format!("failed to load catalog from {}", path.display()))?;
                tracing::info!(path = %path.display(), scores = catalog.len(), "using catalog resource");
                catalog
            }
            None => {
                let catalog = Catalog::builtin()
                    .map_err(|e| eyre::eyre!("built-in catalog failed validation: {e}"))?;
                tracing::info!(scores = catalog.len(), "using built-in catalog");
                catalog.clone()
            }
        };
        Ok(Arc::new(catalog))
    }

    pub fn cors_layer(&self) -> eyre::Result<CorsLayer> {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        Ok(match &self.cors_origin {
            Some(origin) => {
                let origin: HeaderValue = origin
                    .parse()
                    .wrap_err_with(|| format!("invalid {CORS_ORIGIN_VAR}: {origin}"))?;
                layer.allow_origin(origin)
            }
            None => {
                tracing::warn!("{CORS_ORIGIN_VAR} not set, allowing any origin");
                layer.allow_origin(Any)
            }
        })
    }
}
