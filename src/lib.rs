//! # Notebook Portfolio
//!
//! A personal portfolio rendered as a single page with a notebook-paper
//! look. The site has four sections (About, Resume, Projects, Blogs),
//! selected by the location hash (`#/resume`, `#/projects/<slug>`, ...).
//!
//! # Architecture
//!
//! ```text
//! settings.json ─┐
//!                ├─ content parsers ─┐
//! portfolio.toml ┘                   ├─ render ─ generate ─ dist/index.html
//!    catalogs (projects, blogs) ─────┘
//! ```
//!
//! The editable content (name, resume lines, publications, ...) lives in a
//! JSON settings store. The long-form project and blog entries are compiled
//! into static catalogs. Rendering is a pure function from a [`router::Page`]
//! and a [`render::RenderContext`] to HTML, so every page can be tested
//! without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Forgiving parsers for pipe-delimited resume, project, and publication lines |
//! | [`router`] | Fragment-to-route normalization, route dispatch, and the hash router |
//! | [`catalog`] | Static project and blog registries with slug lookup |
//! | [`settings`] | Editable settings object and its persistent stores |
//! | [`config`] | `portfolio.toml` loading, validation, merging, and theme CSS |
//! | [`preview`] | CSV table previews on project pages |
//! | [`render`] | Maud page renderers for every route |
//! | [`generate`] | Writes the single-file site and copies assets |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Pre-rendered Templates Over Client Rendering
//!
//! Every known route is rendered ahead of time into a `<template>`; a short
//! script swaps them on `hashchange`. Route semantics stay in Rust
//! ([`router::dispatch`]), and the browser only does lookups.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Interpolation is
//! auto-escaped, so user-edited settings can never inject markup.
//!
//! ## Content Never Fails
//!
//! Malformed lines parse to records with empty fields, unknown slugs render
//! a not-found card, and a corrupt settings file falls back to defaults.
//! Only configuration and output I/O errors stop a build.

pub mod catalog;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod preview;
pub mod render;
pub mod router;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_helpers;
