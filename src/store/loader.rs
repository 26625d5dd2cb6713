//! Guidance document loader
//!
//! Parses markdown documents with an optional TOML front-matter header:
//!
//! ```text
//! +++
//! topic = "naming"
//! title = "Naming conventions"
//! tags = ["naming", "style"]
//! +++
//!
//! # Naming conventions
//! ...
//! ```
//!
//! Directory layout accepted by [`load_dir`]:
//!
//! ```text
//! guides/
//! ├── naming.md            # topic "naming"
//! ├── testing.md           # topic "testing"
//! └── code-review/
//!     └── SKILL.md         # topic "code-review"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::document::{DocumentSource, GuidanceDocument};
use crate::errors::LoadError;

const FENCE: &str = "+++";
const SKILL_FILE: &str = "SKILL.md";

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parse one document.
///
/// `origin` names the content in error messages. `path` is used to derive
/// the topic when the header does not declare one.
pub fn parse_document(
    origin: &str,
    path: &Path,
    content: &str,
    source: DocumentSource,
) -> Result<GuidanceDocument, LoadError> {
    let (header, body) = split_front_matter(origin, content)?;

    let front: FrontMatter = match header {
        Some(header) => toml::from_str(header)
            .map_err(|e| LoadError::malformed(origin, format!("invalid front matter: {}", e)))?,
        None => FrontMatter::default(),
    };

    let topic = match front.topic {
        Some(topic) => topic.trim().to_lowercase(),
        None => topic_from_path(path)
            .ok_or_else(|| LoadError::malformed(origin, "cannot derive topic from path"))?,
    };
    validate_topic(origin, &topic)?;

    let body = body.trim();
    if body.is_empty() {
        return Err(LoadError::malformed(origin, "document body is empty"));
    }

    let mut document = GuidanceDocument::new(topic, front.tags, body).with_source(source);
    if let Some(title) = front.title {
        document = document.with_title(title);
    }
    if let Some(description) = front.description {
        document = document.with_description(description);
    }

    debug!(topic = document.topic(), origin, tags = document.tags().len(), "Parsed document");
    Ok(document)
}

/// Read and parse a single document file
pub fn load_file(path: &Path) -> Result<GuidanceDocument, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    parse_document(&origin, path, &content, DocumentSource::File(path.to_path_buf()))
}

/// Load every `*.md` file in `dir` and every `<subdir>/SKILL.md` one level down.
///
/// Files are visited in path order so results are deterministic.
pub fn load_dir(dir: &Path) -> Result<Vec<GuidanceDocument>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingSource {
            path: dir.to_path_buf(),
        });
    }

    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(io_err)?;
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let skill = path.join(SKILL_FILE);
            if skill.is_file() {
                documents.push(load_file(&skill)?);
            }
        } else if is_markdown(&path) {
            documents.push(load_file(&path)?);
        }
    }

    debug!(dir = %dir.display(), count = documents.len(), "Loaded documents directory");
    Ok(documents)
}

fn split_front_matter<'a>(
    origin: &str,
    content: &'a str,
) -> Result<(Option<&'a str>, &'a str), LoadError> {
    let content = content.trim_start_matches('\u{feff}');
    let Some(rest) = content.strip_prefix(FENCE) else {
        return Ok((None, content));
    };
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or_else(|| LoadError::malformed(origin, "front matter fence must be on its own line"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Ok((Some(&rest[..offset]), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(LoadError::malformed(origin, "unterminated front matter"))
}

fn topic_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let topic = if file_name.eq_ignore_ascii_case(SKILL_FILE) {
        path.parent()?.file_name()?.to_str()?
    } else {
        path.file_stem()?.to_str()?
    };
    Some(topic.to_lowercase())
}

fn validate_topic(origin: &str, topic: &str) -> Result<(), LoadError> {
    if topic.is_empty() {
        return Err(LoadError::malformed(origin, "topic is empty"));
    }
    if topic.chars().any(char::is_whitespace) {
        return Err(LoadError::malformed(
            origin,
            format!("topic '{}' contains whitespace", topic),
        ));
    }
    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
