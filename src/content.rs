//! Parsers for the pipe-delimited content fields.
//!
//! The editable settings store resume entries, past projects and
//! publications as plain multi-line strings, one record per line:
//!
//! ```text
//! 2023–2024 — Technical Consultant, Indiana University | I supported ...
//! Slack Bot | Django-backed Slack agent | https://github.com/...
//! Parallel SVM Model for Forest Fire Prediction | https://doi.org/...
//! ```
//!
//! Every parser here is forgiving: lines are trimmed, blank lines dropped,
//! and missing fields become empty strings. Nothing returns an error. Record
//! order always follows line order, which the resume uses as its timeline.

use serde::Serialize;

/// One resume line: `"<dates> — <title> | <body>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceRecord {
    pub dates: String,
    pub title: String,
    pub body: String,
}

/// One "past project" line: `"<name> | <description> | <url>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub name: String,
    pub desc: String,
    pub url: String,
}

/// One publication line: `"<title> | <url>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationRecord {
    pub title: String,
    pub url: String,
}

/// A named group of skills, e.g. `Cloud: AWS, Azure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Split a block into trimmed, non-empty lines. Handles `\n` and `\r\n`.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Return the `n`th pipe-separated field of a line, trimmed, or `""`.
fn nth_field(fields: &[&str], n: usize) -> String {
    fields.get(n).map(|f| f.trim().to_string()).unwrap_or_default()
}

/// Locate the dash separating dates from title in the left half of a line.
///
/// Returns the byte offset and byte length of the separator. Priority is
/// em-dash, then en-dash, then hyphen. For the hyphen a spaced ` - ` wins
/// over the first bare `-`, so ranges like `2020-2021 - Title` keep their
/// dates intact. A title with a hyphenated word and no other separator is
/// still split at that word.
fn find_date_separator(left: &str) -> Option<(usize, usize)> {
    for dash in ['—', '–'] {
        if let Some(idx) = left.find(dash) {
            return Some((idx, dash.len_utf8()));
        }
    }
    if let Some(idx) = left.find(" - ") {
        return Some((idx + 1, 1));
    }
    left.find('-').map(|idx| (idx, 1))
}

/// Parse the resume/experience block.
///
/// Each line is split on the first `|`; everything after it is the body.
/// The left part is split into dates and title on the first dash (see
/// [`find_date_separator`]). Without any dash the whole left part is the
/// title and `dates` is empty.
pub fn parse_experience_lines(text: &str) -> Vec<ExperienceRecord> {
    content_lines(text)
        .map(|line| {
            let (left, body) = match line.split_once('|') {
                Some((left, body)) => (left.trim(), body.trim()),
                None => (line, ""),
            };
            let (dates, title) = match find_date_separator(left) {
                Some((idx, len)) => (left[..idx].trim(), left[idx + len..].trim()),
                None => ("", left),
            };
            ExperienceRecord {
                dates: dates.to_string(),
                title: title.to_string(),
                body: body.to_string(),
            }
        })
        .collect()
}

/// Parse the past-projects block: `name | desc | url`.
///
/// Fields beyond the third are ignored.
pub fn parse_project_lines(text: &str) -> Vec<ProjectRecord> {
    content_lines(text)
        .map(|line| {
            let fields: Vec<&str> = line.split('|').collect();
            ProjectRecord {
                name: nth_field(&fields, 0),
                desc: nth_field(&fields, 1),
                url: nth_field(&fields, 2),
            }
        })
        .collect()
}

/// Parse the publications block: `title | url`.
pub fn parse_publication_lines(text: &str) -> Vec<PublicationRecord> {
    content_lines(text)
        .map(|line| {
            let fields: Vec<&str> = line.split('|').collect();
            PublicationRecord {
                title: nth_field(&fields, 0),
                url: nth_field(&fields, 1),
            }
        })
        .collect()
}

/// Split a single-line list on `sep`, trimming items and dropping empties.
///
/// Used for degrees (`;`), experience focus areas and skills (`,`).
pub fn split_list(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parse `"Languages: Python, Java; Cloud: AWS"` into named skill groups.
///
/// Groups are separated by `;`, the name ends at the first `:`. A group
/// without a colon keeps all of its text as skills under an empty name.
/// Groups that end up with neither name nor skills are dropped.
pub fn parse_skill_categories(text: &str) -> Vec<SkillCategory> {
    text.split(';')
        .filter_map(|group| {
            let (name, skills) = match group.split_once(':') {
                Some((name, skills)) => (name.trim(), skills),
                None => ("", group),
            };
            let skills = split_list(skills, ',');
            if name.is_empty() && skills.is_empty() {
                return None;
            }
            Some(SkillCategory {
                name: name.to_string(),
                skills,
            })
        })
        .collect()
}
