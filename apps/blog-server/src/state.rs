//! Application state - shared across all handlers.

use std::sync::Arc;

use quire_core::BlogService;
use quire_core::error::RenderError;
use quire_core::ports::{PostRepository, Renderer};
use quire_infra::{DatabaseConfig, InMemoryPostRepository, MiniJinjaRenderer};

#[cfg(feature = "postgres")]
use quire_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub renderer: Arc<dyn Renderer>,
    /// Name of the active post store, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Assemble state from explicit collaborators.
    pub fn new(
        posts: Arc<dyn PostRepository>,
        renderer: Arc<dyn Renderer>,
        storage: &'static str,
    ) -> Self {
        Self {
            blog: BlogService::new(posts),
            renderer,
            storage,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn init(db_config: Option<&DatabaseConfig>) -> Result<Self, RenderError> {
        let renderer: Arc<dyn Renderer> = Arc::new(MiniJinjaRenderer::new()?);
        let (posts, storage) = Self::post_store(db_config).await;

        tracing::info!(storage, "Application state initialized");

        Ok(Self::new(posts, renderer, storage))
    }

    #[cfg(feature = "postgres")]
    async fn post_store(
        db_config: Option<&DatabaseConfig>,
    ) -> (Arc<dyn PostRepository>, &'static str) {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (Arc::new(InMemoryPostRepository::new()), "memory");
        };

        match quire_infra::connect(config).await {
            Ok(conn) => (Arc::new(PostgresPostRepository::new(conn)), "postgres"),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                (Arc::new(InMemoryPostRepository::new()), "memory")
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_store(
        db_config: Option<&DatabaseConfig>,
    ) -> (Arc<dyn PostRepository>, &'static str) {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        (Arc::new(InMemoryPostRepository::new()), "memory")
    }
}
