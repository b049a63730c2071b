//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output leads with what a reader would recognize on the site (entry
//! titles, positional index, the route that shows them), with storage
//! details such as file paths as secondary, indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Settings
//!     Source: .portfolio/settings.json
//! Experience (4 entries)
//!     001 2025 Software Engineer Intern, NextWaveSTEM
//! Past projects (4 entries)
//!     001 Forest Fires Prediction
//! Publications (2 entries)
//!     001 Parallel SVM Model for Forest Fire Prediction
//! Skills (18), 4 categories
//!
//! Projects
//!     001 Epilepsy GWAS Association Analysis → #/projects/epilepsy-gwas
//!     002 Variant Evidence Table & Annotation Pipeline → #/projects/variant-evidence-annotation
//!         Preview: projects/variant-annotation/variant_evidence_table_example.csv (4 rows)
//! Blogs
//!     001 From rsIDs to Meaning: My First Step into Genomics → #/blogs/rsids-to-meaning
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 #/ → about
//! 002 #/resume → resume
//! ...
//! Fallbacks
//!     #/projects/* → project-detail()
//!     #/blogs/* → blogs(open=)
//! Generated dist/index.html: 9 routes, 2 fallbacks, 3 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::{BlogEntry, Catalog, ProjectEntry};
use crate::content;
use crate::generate::{GenerateReport, RouteEntry};
use crate::preview::PreviewState;
use crate::settings::Settings;
use std::collections::BTreeMap;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Section header with an entry count.
///
/// ```text
/// Experience (4 entries)
/// Publications (1 entry)
/// ```
fn section_header(title: &str, count: usize) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("{title} ({count} {noun})")
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn route_line(index: usize, route: &str, page: &dyn std::fmt::Display) -> String {
    format!("{} #{} \u{2192} {}", format_index(index), route, page)
}

// ============================================================================
// Check
// ============================================================================

/// Content inventory for `check`.
///
/// Lines that parse into incomplete records are listed under `Hints`; they
/// still render, so they never fail the command.
pub fn format_check_output(
    settings: &Settings,
    store_path: &Path,
    projects: &Catalog<ProjectEntry>,
    blogs: &Catalog<BlogEntry>,
    previews: &BTreeMap<String, PreviewState>,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut hints = Vec::new();

    lines.push("Settings".to_string());
    lines.push(format!("{}Source: {}", indent(1), store_path.display()));

    let experience = content::parse_experience_lines(&settings.resume_lines);
    lines.push(section_header("Experience", experience.len()));
    for (i, item) in experience.iter().enumerate() {
        let dates = if item.dates.is_empty() {
            String::new()
        } else {
            format!("{} ", item.dates)
        };
        lines.push(format!(
            "{}{} {}{}",
            indent(1),
            format_index(i + 1),
            dates,
            truncate(&item.title, 60)
        ));
        if item.dates.is_empty() {
            hints.push(format!(
                "experience {}: empty dates (nothing before the first dash)",
                format_index(i + 1)
            ));
        }
    }

    let past_projects = content::parse_project_lines(&settings.past_project_lines);
    lines.push(section_header("Past projects", past_projects.len()));
    for (i, project) in past_projects.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), project.name));
        if project.desc.is_empty() {
            hints.push(format!(
                "past project {}: missing description field",
                format_index(i + 1)
            ));
        }
    }

    let publications = content::parse_publication_lines(&settings.publication_lines);
    lines.push(section_header("Publications", publications.len()));
    for (i, publication) in publications.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(1),
            format_index(i + 1),
            truncate(&publication.title, 60)
        ));
    }

    let skills = content::split_list(&settings.skills, ',');
    let categories = content::parse_skill_categories(&settings.skills_by_category);
    lines.push(format!(
        "Skills ({}), {} categories",
        skills.len(),
        categories.len()
    ));
    for category in categories.iter().filter(|c| c.name.is_empty()) {
        hints.push(format!(
            "skill category without a name: {}",
            category.skills.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in projects.entries().iter().enumerate() {
        lines.push(format!(
            "{}{} {} \u{2192} #/projects/{}",
            indent(1),
            format_index(i + 1),
            project.label,
            project.slug
        ));
        if let Some(preview) = &project.preview {
            let status = match previews.get(preview.src) {
                Some(PreviewState::Table { rows, .. }) => format!("{} rows", rows.len()),
                Some(PreviewState::Empty) => "header only".to_string(),
                Some(PreviewState::Missing) | None => "missing".to_string(),
            };
            lines.push(format!("{}Preview: {} ({})", indent(2), preview.src, status));
        }
    }
    lines.push("Blogs".to_string());
    for (i, blog) in blogs.entries().iter().enumerate() {
        lines.push(format!(
            "{}{} {} \u{2192} #/blogs/{}",
            indent(1),
            format_index(i + 1),
            blog.title,
            blog.slug
        ));
    }

    if !hints.is_empty() {
        lines.push(String::new());
        lines.push("Hints".to_string());
        for hint in hints {
            lines.push(format!("{}{}", indent(1), hint));
        }
    }

    lines
}

pub fn print_check_output(
    settings: &Settings,
    store_path: &Path,
    projects: &Catalog<ProjectEntry>,
    blogs: &Catalog<BlogEntry>,
    previews: &BTreeMap<String, PreviewState>,
) {
    for line in format_check_output(settings, store_path, projects, blogs, previews) {
        println!("{}", line);
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Routable paths with the page each one selects, then prefix fallbacks.
pub fn format_routes(routes: &[RouteEntry], fallbacks: &[RouteEntry]) -> Vec<String> {
    let mut lines: Vec<String> = routes
        .iter()
        .enumerate()
        .map(|(i, entry)| route_line(i + 1, &entry.route, &entry.page))
        .collect();
    if !fallbacks.is_empty() {
        lines.push("Fallbacks".to_string());
        for entry in fallbacks {
            lines.push(format!(
                "{}#{}* \u{2192} {}",
                indent(1),
                entry.route,
                entry.page
            ));
        }
    }
    lines
}

pub fn print_routes(routes: &[RouteEntry], fallbacks: &[RouteEntry]) {
    for line in format_routes(routes, fallbacks) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = format_routes(&report.routes, &report.fallbacks);
    lines.push(format!(
        "Generated {}: {} routes, {} fallbacks, {} assets",
        report.index_path.display(),
        report.routes.len(),
        report.fallbacks.len(),
        report.assets_copied
    ));
    for src in &report.missing_previews {
        lines.push(format!("{}Preview not found: {}", indent(1), src));
    }
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Every settings field; multi-line values continue on indented lines.
pub fn format_settings(settings: &Settings) -> Vec<String> {
    let mut lines = Vec::new();
    for name in Settings::FIELD_NAMES {
        let value = settings.field(name).unwrap_or_default();
        let mut value_lines = value.lines();
        match value_lines.next() {
            Some(first) => lines.push(format!("{name}: {first}")),
            None => lines.push(format!("{name}:")),
        }
        for rest in value_lines {
            lines.push(format!("{}{}", indent(1), rest));
        }
    }
    lines
}

pub fn print_settings(settings: &Settings) {
    for line in format_settings(settings) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
