//! Activity tags and the vocabulary they are validated against.
//!
//! A [`Tag`] can only be obtained through a [`TagVocabulary`], so every tag
//! held by the core is already canonical (upper-case) and known. Unknown
//! tokens are rejected with [`TrackerError::InvalidTag`]; resolving them to
//! `OTHER` is the caller's decision, made before the core is reached.
//!
//! ```rust
//! use tasktrack::libs::tag::TagVocabulary;
//!
//! let vocabulary = TagVocabulary::default();
//! let tag = vocabulary.resolve("coding")?;
//! assert_eq!(tag.as_str(), "CODING");
//! assert!(vocabulary.resolve("xyz").is_err());
//! # Ok::<(), tasktrack::libs::error::TrackerError>(())
//! ```

use super::error::{Result, TrackerError};
use std::fmt;

/// Tags available when no configuration overrides them.
pub const DEFAULT_TAGS: [&str; 5] = ["CODING", "MEETING", "TRAINING", "BREAK", "OTHER"];

/// Tag every vocabulary must contain; unknown input falls back to it.
pub const FALLBACK_TAG: &str = "OTHER";

/// Token reserved by the state file for "no active task".
pub const RESERVED_NONE: &str = "NONE";

/// A validated, upper-case activity tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rebuilds a tag already written to disk.
    ///
    /// Persisted tags are not checked against the vocabulary: a task keeps
    /// its tag even after the configuration drops it. Only empty names and
    /// the reserved `NONE` are refused.
    pub(crate) fn from_persisted(name: &str) -> Option<Tag> {
        let name = normalize(name);
        if name.is_empty() || name == RESERVED_NONE {
            None
        } else {
            Some(Tag(name))
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of tags accepted by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: Vec<String>,
}

impl TagVocabulary {
    /// Builds a vocabulary from raw names.
    ///
    /// Names are trimmed, upper-cased and deduplicated. `OTHER` is appended
    /// when missing. Empty names and the reserved `NONE` are rejected.
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in tags {
            let name = normalize(raw.as_ref());
            if name.is_empty() || name == RESERVED_NONE {
                return Err(TrackerError::InvalidTag {
                    tag: name,
                    expected: "a non-empty name other than NONE".to_string(),
                });
            }
            if !normalized.contains(&name) {
                normalized.push(name);
            }
        }
        if !normalized.iter().any(|tag| tag == FALLBACK_TAG) {
            normalized.push(FALLBACK_TAG.to_string());
        }

        Ok(Self { tags: normalized })
    }

    /// Validates a token and returns its canonical tag.
    pub fn resolve(&self, token: &str) -> Result<Tag> {
        let name = normalize(token);
        if self.tags.contains(&name) {
            Ok(Tag(name))
        } else {
            Err(TrackerError::InvalidTag {
                tag: name,
                expected: self.names().join(", "),
            })
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tags.contains(&normalize(token))
    }

    /// The `OTHER` tag, always present.
    pub fn fallback(&self) -> Tag {
        Tag(FALLBACK_TAG.to_string())
    }

    pub fn names(&self) -> &[String] {
        &self.tags
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_uppercase()
}
