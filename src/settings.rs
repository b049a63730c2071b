//! Editable site content and its key-value store.
//!
//! [`Settings`] is the one object the site owner edits: names, taglines, and
//! the delimited text blocks that [`crate::content`] parses. It is stored as
//! JSON under a single key ([`STORAGE_KEY`]), the way a browser would keep it
//! in local storage.
//!
//! # Failure policy
//!
//! Reading never fails. A missing, unreadable, or corrupt store yields the
//! built-in defaults, and a stored object with missing keys is completed
//! from the defaults field by field. Writing can fail at the store level
//! ([`SettingsStore::save`]), but [`SettingsSession::save`] absorbs the
//! error: the in-memory copy is updated regardless, so the current session
//! carries on with the new content.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the settings object is stored under.
pub const STORAGE_KEY: &str = "notebook.portfolio.settings.v2";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store is read-only")]
    ReadOnly,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown settings field '{0}' (expected one of: {fields})", fields = Settings::FIELD_NAMES.join(", "))]
    UnknownField(String),
}

/// All editable content. Keys are camelCase on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub name: String,
    pub tagline: String,
    /// Multi-paragraph greeting; newlines are preserved on render.
    pub hero_statement: String,
    pub bio_tagline: String,
    /// `;`-separated degree lines.
    pub degrees: String,
    /// `,`-separated focus areas.
    pub experiences: String,
    /// Empty shows a placeholder instead of a photo.
    pub headshot_url: String,
    /// One `dates — title | body` entry per line.
    pub resume_lines: String,
    /// One `name | desc | url` entry per line.
    pub past_project_lines: String,
    /// One `title | url` entry per line.
    pub publication_lines: String,
    /// `,`-separated skills.
    pub skills: String,
    /// `Category: a, b; Other: c`.
    pub skills_by_category: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Harita Anbuvelan".to_string(),
            tagline: "Omics • Software • Cloud".to_string(),
            hero_statement: DEFAULT_HERO.to_string(),
            bio_tagline: "The 0.1% that makes me".to_string(),
            degrees: " M.S. Computer Science — Purdue University;  B.E. Computer Science — Visvesvaraya Technological University".to_string(),
            experiences: "Bioinformatics (Genomics), Cloud engineering, Data platforms, Web technology, Software Development".to_string(),
            headshot_url: "headshot.jpeg".to_string(),
            resume_lines: DEFAULT_RESUME.to_string(),
            past_project_lines: DEFAULT_PAST_PROJECTS.to_string(),
            publication_lines: DEFAULT_PUBLICATIONS.to_string(),
            skills: "Python, Linux, BASH, PowerShell, Java, JavaScript, React, HTML, CSS, SQL, Django, AWS, Azure, Docker, Terraform, Git, CI/CD, Three.js".to_string(),
            skills_by_category: "Languages: Python, Java, JavaScript; Frontend: React, HTML, CSS, Three.js, React Three Fiber, Tailwind; Cloud: AWS, Azure, GCP; Data/Ops: SQL, MySQL, PostgreSQL, Docker, Kubernetes, Terraform, Git, CI/CD, Linux, Tableau".to_string(),
        }
    }
}

const DEFAULT_HERO: &str = "Hello,

I’m on a path to help shape what’s ahead by studying what’s within. My passion for helping people and the skills I’ve deliberately honed across computing and biology are two sides of the same coin—one I use to bridge biology and innovation with clear, reproducible software. If this resonates with your work, let’s build that bridge together.";

const DEFAULT_RESUME: &str = "2025 — Software Engineer Intern, NextWaveSTEM | I designed and built classroom-ready drone simulations with React and Three.js. I extended the Blockly interface with new commands and event-driven flight behaviors so students could code and immediately see motion in 3D. I worked with educators to tune the experience and shipped features from prototype to production.
2023–2024 — Technical Consultant, Indiana University UITS | I supported campus research and teaching across Windows, macOS, iOS, and Android, plus core services like email, LMS, and storage thereby keeping data and tools reliably accessible. I managed identity and access (SSO/MFA and CrimsonCard) with strict verification and policy compliance, reinforcing privacy and data integrity. I also backed Student Technology Centers and residence-hall networking, turning complex issues into clear, reproducible steps and documentation.
2020–2022 — Cloud Engineer, L&T Infotech | I engineered AWS and Azure infrastructure for Linux and Windows workloads that were codified with Terraform and shipped through CI/CD for reliable, repeatable environments. I automated provisioning and operations with Bash and PowerShell, enforced security with IAM/RBAC and encryption (KMS/Key Vault), and instrumented CloudWatch/Azure Monitor for clear visibility. I kept platforms efficient and resilient with autoscaling, right-sizing, and Spot/Reserved strategies, backed by concise runbooks and standards.
2019 — Research Intern, National Aerospace Laboratories (NAL) | I built Python automation to analyze TCP sequence/ack patterns and surface threats, reducing response times by 25%. I contributed backend and UI to a Django traffic-monitoring app, integrated live network data for real-time dashboards, and improved troubleshooting speed and overall efficiency by 15%.";

const DEFAULT_PAST_PROJECTS: &str = "Forest Fires Prediction | ML model that forecasts forest-fire risk from weather and terrain signals for early action | https://github.com/Harita30/forest_fires
WannaGo | Android app to plan and share outings—save places, build quick itineraries, and navigate with one tap | https://github.com/Harita30/WannaGo
Slack Bot | Django-backed Slack agent that verifies requests and responds to commands for quick, reliable workflows | https://github.com/Harita30/Slack_Bot
Voice Assistant | Lightweight NLP assistant that turns speech into clean text and structured notes for study or tasks | https://github.com/Harita30/Voice-Assistant";

const DEFAULT_PUBLICATIONS: &str = "Parallel SVM Model for Forest Fire Prediction | https://doi.org/10.1016/j.socl.2021.100014
A Comparison of Different Methodologies for Predicting Forest Fires | https://doi.org/10.1007/978-981-16-1056-1_14";

/// Maps each stored field name to its struct field. `FIELD_NAMES`,
/// [`Settings::field`] and the slot used by [`Settings::set_field`] are all
/// generated from this one list.
macro_rules! settings_fields {
    ($($key:literal => $field:ident),* $(,)?) => {
        impl Settings {
            /// Field names as they appear in the stored JSON.
            pub const FIELD_NAMES: [&'static str; [$($key),*].len()] = [$($key),*];

            /// Value of a field by stored name.
            pub fn field(&self, field: &str) -> Option<&str> {
                match field {
                    $($key => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }

            fn slot_mut(&mut self, field: &str) -> Option<&mut String> {
                match field {
                    $($key => Some(&mut self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

settings_fields! {
    "name" => name,
    "tagline" => tagline,
    "heroStatement" => hero_statement,
    "bioTagline" => bio_tagline,
    "degrees" => degrees,
    "experiences" => experiences,
    "headshotUrl" => headshot_url,
    "resumeLines" => resume_lines,
    "pastProjectLines" => past_project_lines,
    "publicationLines" => publication_lines,
    "skills" => skills,
    "skillsByCategory" => skills_by_category,
}

impl Settings {
    /// Overwrite a field by stored name.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        let slot = self
            .slot_mut(field)
            .ok_or_else(|| SettingsError::UnknownField(field.to_string()))?;
        *slot = value.to_string();
        Ok(())
    }
}

/// Persistence for [`Settings`].
pub trait SettingsStore {
    /// Stored settings, or defaults when absent or unreadable.
    fn load(&self) -> Settings;
    /// Persist `settings`. Callers that must not fail use
    /// [`SettingsSession::save`] instead.
    fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}

/// Decode the settings object out of a store document.
///
/// The document is a JSON object mapping storage keys to values; only
/// [`STORAGE_KEY`] is read. Any problem yields `None`.
fn decode_document(content: &str) -> Option<Settings> {
    let doc: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("settings store is not a JSON object, using defaults: {err}");
            return None;
        }
    };
    let value = doc.get(STORAGE_KEY)?.clone();
    match serde_json::from_value(value) {
        Ok(settings) => Some(settings),
        Err(err) => {
            log::warn!("stored settings are malformed, using defaults: {err}");
            None
        }
    }
}

/// Settings kept in a JSON file on disk.
///
/// Other keys already present in the file are preserved on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> serde_json::Map<String, serde_json::Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(err) => {
                log::debug!("no settings at {} ({err}), using defaults", self.path.display());
                return Settings::default();
            }
        };
        decode_document(&content).unwrap_or_default()
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let mut doc = self.read_document();
        doc.insert(STORAGE_KEY.to_string(), serde_json::to_value(settings)?);
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process store holding the raw JSON document.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with a raw document, which may be malformed.
    pub fn with_document(document: &str) -> Self {
        Self {
            document: RefCell::new(Some(document.to_string())),
            read_only: false,
        }
    }

    /// Store whose writes always fail.
    pub fn read_only() -> Self {
        Self {
            document: RefCell::new(None),
            read_only: true,
        }
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Settings {
        self.document
            .borrow()
            .as_deref()
            .and_then(decode_document)
            .unwrap_or_default()
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        let mut doc = serde_json::Map::new();
        doc.insert(STORAGE_KEY.to_string(), serde_json::to_value(settings)?);
        *self.document.borrow_mut() = Some(serde_json::to_string(&doc)?);
        Ok(())
    }
}

/// The settings in use plus the store behind them.
///
/// Created once at startup and passed by reference to whatever renders.
pub struct SettingsSession<S: SettingsStore> {
    store: S,
    current: Settings,
}

impl<S: SettingsStore> SettingsSession<S> {
    /// Load from `store` once.
    pub fn open(store: S) -> Self {
        let current = store.load();
        Self { store, current }
    }

    pub fn settings(&self) -> &Settings {
        &self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the current settings and try to persist them.
    ///
    /// Returns whether the write reached the store. A failed write is
    /// logged and otherwise ignored.
    pub fn save(&mut self, next: Settings) -> bool {
        self.current = next;
        match self.store.save(&self.current) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("settings not persisted: {err}");
                false
            }
        }
    }
}
