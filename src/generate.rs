//! Static site generation.
//!
//! Writes the whole portfolio as a single `index.html`. Every known route
//! is pre-rendered into a `<template data-route="...">`. An embedded
//! script picks the template for the current location hash on load and on
//! every `hashchange`.
//!
//! ## Route resolution in the browser
//!
//! 1. Exact match on a pre-rendered route (`/`, `/resume`, `/projects/<slug>`, ...).
//! 2. Prefix fallback: `/projects/<anything>` shows "Project not found",
//!    `/blogs/<anything>` shows the listing without a modal. Deeper paths
//!    are reduced to their third segment first, matching [`dispatch`].
//! 3. Otherwise the not-found template.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # All pages, CSS and router inlined
//! ├── headshot.jpeg              # Copied from assets/
//! └── projects/
//!     └── variant-annotation/
//!         └── variant_evidence_table_example.csv
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/router.js`: Template swapping on hash changes

use crate::catalog::{self, BlogEntry, Catalog, ProjectEntry};
use crate::config::{self, PortfolioConfig};
use crate::preview::{self, PreviewState};
use crate::render::{self, RenderContext};
use crate::router::{Page, dispatch};
use crate::settings::Settings;
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/router.js");

/// A route and the page it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: String,
    pub page: Page,
}

/// What [`generate`] wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub index_path: PathBuf,
    pub routes: Vec<RouteEntry>,
    pub fallbacks: Vec<RouteEntry>,
    pub assets_copied: usize,
    /// Preview sources that could not be loaded.
    pub missing_previews: Vec<String>,
}

/// Every route with its own template: the top-level pages, then one per
/// project and one per blog post, in catalog order.
pub fn known_routes(
    projects: &Catalog<ProjectEntry>,
    blogs: &Catalog<BlogEntry>,
) -> Vec<RouteEntry> {
    let mut pages = vec![
        Page::About,
        Page::Resume,
        Page::Projects,
        Page::Blogs { open: None },
    ];
    pages.extend(projects.entries().iter().map(|p| Page::ProjectDetail {
        slug: p.slug.to_string(),
    }));
    pages.extend(blogs.entries().iter().map(|b| Page::Blogs {
        open: Some(b.slug.to_string()),
    }));
    pages
        .into_iter()
        .map(|page| RouteEntry {
            route: page.path(),
            page,
        })
        .collect()
}

/// Prefix templates for slugs missing from the catalogs.
///
/// `route` is the prefix; `page` is what [`dispatch`] returns for it.
pub fn fallback_routes() -> Vec<RouteEntry> {
    ["/projects/", "/blogs/"]
        .into_iter()
        .map(|prefix| RouteEntry {
            route: prefix.to_string(),
            page: dispatch(prefix),
        })
        .collect()
}

/// Theme variables followed by the base stylesheet.
pub fn site_css(config: &PortfolioConfig) -> String {
    format!("{}\n\n{}", config::generate_theme_css(&config.theme), CSS_STATIC)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Load every project preview from `assets_dir`, keyed by source path.
pub fn load_previews(
    projects: &Catalog<ProjectEntry>,
    assets_dir: &Path,
    max_rows: usize,
) -> BTreeMap<String, PreviewState> {
    projects
        .entries()
        .iter()
        .filter_map(|project| project.preview.as_ref())
        .map(|spec| {
            (
                spec.src.to_string(),
                preview::load_preview(assets_dir, spec.src, max_rows),
            )
        })
        .collect()
}

/// Render the complete single-file site.
pub fn render_site(ctx: &RenderContext<'_>) -> Markup {
    let css = site_css(ctx.config);
    let shell = |page: &Page| render::render_shell(page, ctx, render::render_page(page, ctx));
    let routes = known_routes(ctx.projects, ctx.blogs);
    let fallbacks = fallback_routes();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (render::page_title(&Page::About, ctx)) }
                style { (PreEscaped(css)) }
            }
            body {
                div id="app" {
                    (shell(&Page::About))
                }
                @for entry in &routes {
                    template data-route=(entry.route) data-title=(render::page_title(&entry.page, ctx)) {
                        (shell(&entry.page))
                    }
                }
                @for entry in &fallbacks {
                    template data-fallback=(entry.route) data-title=(render::page_title(&entry.page, ctx)) {
                        (shell(&entry.page))
                    }
                }
                template data-not-found data-title=(render::page_title(&Page::NotFound, ctx)) {
                    (shell(&Page::NotFound))
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

pub fn generate(
    settings: &Settings,
    config: &PortfolioConfig,
    project_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let assets_dir = project_root.join(&config.assets_dir);
    let projects = catalog::projects();
    let blogs = catalog::blogs();

    let previews = load_previews(projects, &assets_dir, config.preview.max_rows);
    let missing_previews = previews
        .iter()
        .filter(|(_, state)| **state == PreviewState::Missing)
        .map(|(src, _)| src.clone())
        .collect();

    let ctx = RenderContext {
        settings,
        config,
        projects,
        blogs,
        previews: &previews,
        year: current_year(),
    };

    fs::create_dir_all(output_dir)?;

    let assets_copied = if assets_dir.is_dir() {
        copy_assets(&assets_dir, output_dir)?
    } else {
        log::info!("no assets directory at {}", assets_dir.display());
        0
    };

    let index_path = output_dir.join("index.html");
    fs::write(&index_path, render_site(&ctx).into_string())?;
    log::info!("wrote {}", index_path.display());

    Ok(GenerateReport {
        index_path,
        routes: known_routes(projects, blogs),
        fallbacks: fallback_routes(),
        assets_copied,
        missing_previews,
    })
}

/// Mirror `src` into `dst`. Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let dst_path = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = dst_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst_path)?;
            log::debug!("copied {}", rel.display());
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
