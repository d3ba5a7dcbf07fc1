#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod overlay;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use autobiography_core::{resolve_manifest, ManifestSource, PortfolioManifest};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::Portfolio;

/// Demo manifest used when no manifest is configured
const BUNDLED_MANIFEST: &str = include_str!("../assets/gallery.json");

/// Autobiography - personal portfolio with a photo gallery lightbox
#[derive(Parser, Debug)]
#[command(name = "autobiography-desktop")]
#[command(about = "Autobiography - personal portfolio with a photo gallery lightbox")]
struct Args {
    /// Page manifest (default: <config dir>/autobiography/gallery.json, then the bundled demo)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 850.0)]
    height: f64,
}

/// Resolve, read and validate the page manifest.
///
/// Any problem here aborts startup; nothing is checked lazily later.
fn load_portfolio(args: &Args) -> anyhow::Result<Portfolio> {
    let config_dir = dirs::config_dir();
    let source = resolve_manifest(args.manifest.as_deref(), config_dir.as_deref())?;

    let manifest = match &source {
        ManifestSource::Explicit(path) | ManifestSource::UserConfig(path) => {
            PortfolioManifest::load(path)
                .with_context(|| format!("Failed to load manifest {:?}", path))?
        }
        ManifestSource::Bundled => PortfolioManifest::from_json(BUNDLED_MANIFEST)
            .context("Bundled manifest is invalid")?,
    };

    let gallery = manifest.gallery()?;
    tracing::info!(?source, images = gallery.len(), "Loaded portfolio manifest");
    if gallery.is_empty() {
        tracing::warn!("Gallery is empty; lightbox disabled");
    }

    Ok(Portfolio {
        title: manifest.title,
        tagline: manifest.tagline,
        gallery,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    autobiography_core::logging::init(args.verbose);

    let portfolio = load_portfolio(&args)?;
    tracing::info!("👋 Welcome to {}'s autobiography!", portfolio.title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&portfolio.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(portfolio)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_manifest_is_valid() {
        let manifest = PortfolioManifest::from_json(BUNDLED_MANIFEST).unwrap();
        assert!(!manifest.gallery().unwrap().is_empty());
    }

    #[test]
    fn args_parse_verbosity_and_manifest() {
        let args = Args::parse_from(["autobiography-desktop", "-vv", "-m", "page.json"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.manifest, Some(PathBuf::from("page.json")));
        assert_eq!(args.width, 1100.0);
    }

    #[test]
    fn missing_explicit_manifest_fails_startup() {
        let args = Args::parse_from(["autobiography-desktop", "-m", "/definitely/not/here.json"]);
        assert!(load_portfolio(&args).is_err());
    }
}
