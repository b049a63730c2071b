//! Static project and blog registries.
//!
//! Each registry is an explicit list of descriptors, validated once on
//! first use and read-only afterwards. Entry bodies are Markdown files
//! under `content/`, embedded at compile time.
//!
//! Lookup is a linear scan with an exact, case-sensitive slug comparison.
//! Slugs are unique and never empty, so an empty slug from a route like
//! `/projects/` always misses.

use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry #{0} has an empty slug")]
    EmptySlug(usize),
    #[error("duplicate catalog slug: {0}")]
    DuplicateSlug(String),
}

/// Anything that can live in a [`Catalog`].
pub trait CatalogEntry {
    fn slug(&self) -> &str;
}

/// A local CSV asset shown as a table on a project page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSpec {
    pub title: &'static str,
    /// Path relative to the assets directory, also used as the download link.
    pub src: &'static str,
}

/// A project shown in the gallery and on its own detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub slug: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
    /// Markdown body of the detail page.
    pub body: &'static str,
    pub preview: Option<PreviewSpec>,
}

impl CatalogEntry for ProjectEntry {
    fn slug(&self) -> &str {
        self.slug
    }
}

/// A blog post shown as a sticky note and opened in a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Markdown body rendered inside the modal.
    pub body: &'static str,
}

impl CatalogEntry for BlogEntry {
    fn slug(&self) -> &str {
        self.slug
    }
}

/// Ordered registry keyed by unique slug.
#[derive(Debug, Clone)]
pub struct Catalog<E> {
    entries: Vec<E>,
}

impl<E: CatalogEntry> Catalog<E> {
    /// Build a registry, rejecting empty and duplicate slugs.
    pub fn new(entries: Vec<E>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (idx, entry) in entries.iter().enumerate() {
            let slug = entry.slug();
            if slug.is_empty() {
                return Err(CatalogError::EmptySlug(idx));
            }
            if !seen.insert(slug) {
                return Err(CatalogError::DuplicateSlug(slug.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// First entry whose slug equals `slug`, or `None`.
    pub fn find(&self, slug: &str) -> Option<&E> {
        self.entries.iter().find(|entry| entry.slug() == slug)
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            slug: "epilepsy-gwas",
            label: "Epilepsy GWAS Association Analysis",
            subtitle: "Post-GWAS workflow on epilepsy summary statistics",
            body: include_str!("../content/projects/epilepsy-gwas.md"),
            preview: None,
        },
        ProjectEntry {
            slug: "variant-evidence-annotation",
            label: "Variant Evidence Table & Annotation Pipeline",
            subtitle: "From rsIDs to a triage-ready table with frequency, consequence, and clinical evidence",
            body: include_str!("../content/projects/variant-evidence-annotation.md"),
            preview: Some(PreviewSpec {
                title: "Preview — example evidence table",
                src: "projects/variant-annotation/variant_evidence_table_example.csv",
            }),
        },
    ]
}

fn builtin_blogs() -> Vec<BlogEntry> {
    vec![
        BlogEntry {
            slug: "rsids-to-meaning",
            title: "From rsIDs to Meaning: My First Step into Genomics",
            subtitle: "Turning rsIDs into an evidence table",
            body: include_str!("../content/blogs/rsids-to-meaning.md"),
        },
        BlogEntry {
            slug: "skyscrapers-in-the-genome",
            title: "Skyscrapers in the Genome: My First GWAS Journey",
            subtitle: "Signals, calibration, and better questions",
            body: include_str!("../content/blogs/skyscrapers-in-the-genome.md"),
        },
        BlogEntry {
            slug: "why-genomics-journey",
            title: "From Curiosity to Genomics: Why I Started This Journey",
            subtitle: "A path toward bioinformatics",
            body: include_str!("../content/blogs/why-genomics-journey.md"),
        },
    ]
}

static PROJECTS: LazyLock<Catalog<ProjectEntry>> = LazyLock::new(|| {
    Catalog::new(builtin_projects()).expect("built-in project slugs must be unique")
});

static BLOGS: LazyLock<Catalog<BlogEntry>> =
    LazyLock::new(|| Catalog::new(builtin_blogs()).expect("built-in blog slugs must be unique"));

/// The process-wide project registry.
pub fn projects() -> &'static Catalog<ProjectEntry> {
    &PROJECTS
}

/// The process-wide blog registry.
pub fn blogs() -> &'static Catalog<BlogEntry> {
    &BLOGS
}
