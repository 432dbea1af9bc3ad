// ABOUTME: HTTP server assembly: shared resources, router with middleware and graceful shutdown
// ABOUTME: Loads the catalog once, then serves the food and recommendation API on tokio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

use crate::catalog::FoodCatalog;
use crate::config::ServerConfig;
use crate::routes::{FoodRoutes, HealthRoutes, RecommendRoutes};
use anyhow::{Context, Result};
use axum::Router;
use nutri_core::errors::AppError;
use nutri_intelligence::{FoodPlanner, PlannerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Read-only state shared by every request handler
#[derive(Debug)]
pub struct ServerResources {
    /// Food catalog loaded at startup
    pub catalog: FoodCatalog,
    /// Planner with validated limits
    pub planner: FoodPlanner,
}

impl ServerResources {
    /// Bundle a catalog with a planner
    #[must_use]
    pub const fn new(catalog: FoodCatalog, planner: FoodPlanner) -> Self {
        Self { catalog, planner }
    }

    /// Load the catalog and validate the planner settings from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the planner
    /// configuration is invalid.
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        let catalog = FoodCatalog::load(&config.catalog_path)
            .await
            .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;
        let planner = FoodPlanner::new(config.planner.clone())
            .map_err(AppError::from)
            .context("Invalid planner configuration")?;
        Ok(Self::new(catalog, planner))
    }

    /// Resources over an in-memory catalog with default planner limits
    #[must_use]
    pub fn with_catalog(catalog: FoodCatalog) -> Self {
        Self::new(catalog, FoodPlanner::default())
    }

    /// Planner limits in use
    #[must_use]
    pub fn planner_config(&self) -> &PlannerConfig {
        self.planner.config()
    }
}

/// Build the application router with permissive CORS and request tracing
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(FoodRoutes::routes(Arc::clone(resources)))
        .merge(RecommendRoutes::routes(Arc::clone(resources)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Load resources and serve HTTP until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if resources cannot be loaded, the address cannot be
/// bound or the server fails while running.
pub async fn run(config: ServerConfig) -> Result<()> {
    let resources = Arc::new(ServerResources::from_config(&config).await?);
    info!(
        foods = resources.catalog.len(),
        categories = resources.catalog.categories().len(),
        "Server resources ready"
    );

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("HTTP server listening on {address}");

    axum::serve(listener, router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        () = terminate => warn!("Received terminate signal, shutting down"),
    }
}
