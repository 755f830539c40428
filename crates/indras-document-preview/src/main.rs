//! Entry point for the document preview demo window.

use std::path::PathBuf;

use anyhow::{Context as _, anyhow};
use clap::Parser;
use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};
use indras_document_preview::{DOCUMENT_PREVIEW_CSS, PreviewConfig};
use tracing_subscriber::EnvFilter;

mod demo;

/// Preview chat documents in a desktop window.
#[derive(Debug, Parser)]
#[command(name = "indras-document-preview", version)]
struct Args {
    /// JSON array of document descriptors (defaults to a built-in sample set)
    #[arg(long)]
    documents: Option<PathBuf>,

    /// JSON preview config (defaults to INDRAS_PREVIEW_* environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show remove buttons on the cards
    #[arg(long)]
    removable: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("indras_document_preview=info")),
        )
        .init();

    let args = Args::parse();

    let documents = match &args.documents {
        Some(path) => demo::load_documents(path)
            .with_context(|| format!("loading documents from {}", path.display()))?,
        None => demo::sample_documents(),
    };
    let config = match &args.config {
        Some(path) => PreviewConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PreviewConfig::from_env(),
    };

    tracing::info!(
        documents = documents.len(),
        drawer = %config.drawer_direction,
        "Starting document preview"
    );

    demo::DEMO_STATE
        .set(demo::DemoState {
            documents,
            config,
            removable: args.removable,
        })
        .map_err(|_| anyhow!("demo state already initialized"))?;

    // Optional window geometry from env, used when tiling windows
    let win_x = std::env::var("INDRAS_WIN_X").ok().and_then(|v| v.parse::<f64>().ok());
    let win_y = std::env::var("INDRAS_WIN_Y").ok().and_then(|v| v.parse::<f64>().ok());
    let win_w = std::env::var("INDRAS_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("INDRAS_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let mut wb = WindowBuilder::new()
        .with_title("Indras Document Preview")
        .with_maximized(false);

    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(900.0, 600.0));
    }

    if let (Some(x), Some(y)) = (win_x, win_y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(
                    r#"<style>{}
.demo-column {{ max-width: 760px; margin: 0 auto; padding: 24px; font-family: sans-serif; }}
</style>"#,
                    DOCUMENT_PREVIEW_CSS,
                )),
        )
        .launch(demo::App);

    Ok(())
}
