//! Shared test utilities for the portfolio test suite.
//!
//! Provides a small, self-contained [`Fixture`] (settings, catalogs, and
//! loaded previews) so renderer and generator tests don't depend on the
//! built-in content, plus a helper that lays out a project root on disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fx = Fixture::new();
//! let html = render_page(&Page::Resume, &fx.ctx()).into_string();
//! assert!(html.contains("Data Engineer"));
//! ```

use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

use crate::catalog::{BlogEntry, Catalog, PreviewSpec, ProjectEntry};
use crate::config::PortfolioConfig;
use crate::preview::PreviewState;
use crate::render::RenderContext;
use crate::settings::Settings;

// =========================================================================
// Render fixture
// =========================================================================

pub struct Fixture {
    pub settings: Settings,
    pub config: PortfolioConfig,
    pub projects: Catalog<ProjectEntry>,
    pub blogs: Catalog<BlogEntry>,
    pub previews: BTreeMap<String, PreviewState>,
}

impl Fixture {
    pub fn new() -> Self {
        let mut config = PortfolioConfig::default();
        config.site.owner = "Test Owner".to_string();

        let mut previews = BTreeMap::new();
        previews.insert(
            "data/table.csv".to_string(),
            PreviewState::Table {
                columns: vec!["rsid".into(), "gene".into()],
                rows: vec![vec!["rs1".into(), "GENE1".into()]],
            },
        );

        Self {
            settings: sample_settings(),
            config,
            projects: sample_projects(),
            blogs: sample_blogs(),
            previews,
        }
    }

    pub fn ctx(&self) -> RenderContext<'_> {
        RenderContext {
            settings: &self.settings,
            config: &self.config,
            projects: &self.projects,
            blogs: &self.blogs,
            previews: &self.previews,
            year: 2026,
        }
    }
}

pub fn sample_settings() -> Settings {
    Settings {
        name: "Test Person".to_string(),
        tagline: "Tests • Fixtures".to_string(),
        hero_statement: "Line one.\n\nLine two.".to_string(),
        bio_tagline: "All green".to_string(),
        degrees: "M.S. Testing — Somewhere;  B.S. Mocking — Elsewhere".to_string(),
        experiences: "Parsing, Rendering".to_string(),
        headshot_url: "me.jpg".to_string(),
        resume_lines: "2020-2021 - Data Engineer, Acme | Built pipelines.\n\
                       2022 — Analyst, Beta | Wrote reports."
            .to_string(),
        past_project_lines: "Tool | A tool | https://example.com/tool\nNoLink | No url here"
            .to_string(),
        publication_lines: "Paper One | https://doi.org/10.1/one\nPaper Two".to_string(),
        skills: "Rust, Testing".to_string(),
        skills_by_category: "Languages: Rust, Python; Tools: Cargo".to_string(),
    }
}

pub fn sample_projects() -> Catalog<ProjectEntry> {
    Catalog::new(vec![
        ProjectEntry {
            slug: "alpha",
            label: "Alpha Project",
            subtitle: "First fixture project",
            body: "### Question\n\nWhat does it do?\n",
            preview: None,
        },
        ProjectEntry {
            slug: "beta",
            label: "Beta Project",
            subtitle: "",
            body: "Body with a table preview.\n",
            preview: Some(PreviewSpec {
                title: "Table preview",
                src: "data/table.csv",
            }),
        },
    ])
    .unwrap()
}

pub fn sample_blogs() -> Catalog<BlogEntry> {
    Catalog::new(vec![
        BlogEntry {
            slug: "first-post",
            title: "First Post",
            subtitle: "Where it starts",
            body: "Hello from the first post.\n",
        },
        BlogEntry {
            slug: "second-post",
            title: "Second Post",
            subtitle: "",
            body: "More words.\n",
        },
    ])
    .unwrap()
}

// =========================================================================
// Project root on disk
// =========================================================================

/// Temp project root with a `portfolio.toml` and a small `assets/` tree.
///
/// Contains `assets/headshot.jpeg` and the CSV preview referenced by the
/// built-in variant annotation project.
pub fn setup_project_root(config_toml: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(crate::config::CONFIG_FILENAME), config_toml).unwrap();
    let csv_dir = tmp.path().join("assets/projects/variant-annotation");
    fs::create_dir_all(&csv_dir).unwrap();
    fs::write(
        csv_dir.join("variant_evidence_table_example.csv"),
        "rsid,gene,consequence\nrs429358,APOE,missense_variant\nrs7412,APOE,missense_variant\n",
    )
    .unwrap();
    fs::write(tmp.path().join("assets/headshot.jpeg"), b"\xFF\xD8\xFF").unwrap();
    tmp
}
