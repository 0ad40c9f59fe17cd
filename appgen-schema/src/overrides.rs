//! Object-manager override set.
//!
//! The override document is a flat list of entries:
//!
//! ```xml
//! <overrides>
//!     <object guid="..." override="true"/>
//! </overrides>
//! ```
//!
//! Entries with a malformed `guid` are dropped and a malformed `override`
//! reads as `false`. Neither aborts the load.

use crate::error::ParseError;
use crate::xml::Element;
use std::collections::HashSet;
use std::path::Path;
use uuid::Uuid;

/// Set of object GUIDs that use the alternate access model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    guids: HashSet<Uuid>,
}

impl OverrideSet {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an override document.
    ///
    /// # Errors
    /// Returns `ParseError` if the document itself is not well-formed XML.
    pub fn from_xml(xml: &str) -> Result<Self, ParseError> {
        let root = Element::parse(xml)?;
        let mut set = Self::new();

        for entry in root.descendants_named("object") {
            let Some(guid) = entry.attr("guid").and_then(|g| Uuid::parse_str(g.trim()).ok())
            else {
                tracing::warn!(
                    "Skipping override entry with invalid guid {:?}",
                    entry.attr("guid")
                );
                continue;
            };
            let enabled = entry.attr("override").and_then(parse_bool).unwrap_or(false);
            if enabled {
                set.guids.insert(guid);
            }
        }

        Ok(set)
    }

    /// Loads an override document from a file.
    ///
    /// A path that does not name an existing file yields an empty set.
    ///
    /// # Errors
    /// Returns `ParseError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        if !path.is_file() {
            tracing::debug!("No override file at {}", path.display());
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_xml(&content)
    }

    /// Adds a GUID to the set.
    pub fn insert(&mut self, guid: Uuid) {
        self.guids.insert(guid);
    }

    /// Returns true if the GUID is overridden.
    #[must_use]
    pub fn contains(&self, guid: &Uuid) -> bool {
        self.guids.contains(guid)
    }

    /// Returns the number of overridden objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guids.len()
    }

    /// Returns true if no object is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guids.is_empty()
    }
}

/// Parses `true`/`false`, ignoring case and surrounding whitespace.
fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
