//! Entry-name pattern parsing
//!
//! Patterns arrive as a single option string in the delimiter form
//! `/<pattern>/<flags>`, where the only recognized flag is `i`. Entry names
//! are matched as raw bytes, so names that are not valid UTF-8 are still
//! searched.

use crate::error::TallyError;
use once_cell::sync::Lazy;
use regex::bytes::{Regex as BytesRegex, RegexBuilder};
use regex::Regex;
use std::ffi::OsStr;
use std::fmt;

static DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(.*)/(\w*)$").expect("valid regex"));

/// Compiled matcher for directory entry names.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    case_insensitive: bool,
    regex: BytesRegex,
}

impl NamePattern {
    /// Parse and compile a `/<pattern>/<flags>` option string.
    pub fn parse(spec: &str) -> Result<Self, TallyError> {
        let caps = DELIMITED
            .captures(spec)
            .ok_or_else(|| TallyError::InvalidPatternShape(spec.to_string()))?;
        let source = caps.get(1).map_or("", |m| m.as_str());
        let flags = caps.get(2).map_or("", |m| m.as_str());

        let case_insensitive = match flags {
            "" => false,
            "i" => true,
            other => {
                return Err(TallyError::UnsupportedFlags {
                    spec: spec.to_string(),
                    flags: other.to_string(),
                })
            }
        };

        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| TallyError::InvalidRegex { spec: spec.to_string(), source })?;

        Ok(Self { source: source.to_string(), case_insensitive, regex })
    }

    /// Unanchored search against an entry name.
    pub fn is_match(&self, name: impl AsRef<OsStr>) -> bool {
        self.regex.is_match(name.as_ref().as_encoded_bytes())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &'static str {
        if self.case_insensitive {
            "i"
        } else {
            ""
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags())
    }
}
