// ABOUTME: HTTP server binary serving the food catalog and recommendation API
// ABOUTME: Loads configuration from the environment, initializes logging and runs until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Picker Contributors

//! # Nutri Picker Server Binary
//!
//! Starts the HTTP API on `HTTP_HOST:HTTP_PORT` (default `0.0.0.0:3001`)
//! over the catalog at `NUTRI_CATALOG_PATH`.

use anyhow::Result;
use clap::Parser;
use nutri_picker::{config::ServerConfig, logging, server};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutri-picker-server")]
#[command(about = "Nutri Picker - food bundle recommendations over HTTP")]
struct Args {
    /// Override the catalog file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = catalog;
    }

    info!("Starting Nutri Picker server");
    info!("{}", config.summary());

    server::run(config).await
}
