//! Well-known field names.
//!
//! A handful of field names map to members the runtime base class already
//! provides. They are matched by name before any type-based generation.

use crate::type_map::{FieldShape, shape_for};
use appgen_schema::FieldType;

/// Name of the object's own identifier field.
pub const ARTIFACT_ID: &str = "ArtifactID";

/// Field names with fixed generation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialField {
    /// The object's internal identifier; never generated.
    ArtifactId,
    /// The text identifier, read/write.
    Name,
    /// Creator, read-only.
    SystemCreatedBy,
    /// Creation timestamp, read-only.
    SystemCreatedOn,
    /// Last modifier, read-only.
    SystemLastModifiedBy,
    /// Last modification timestamp, read-only.
    SystemLastModifiedOn,
}

impl SpecialField {
    /// All special fields.
    pub const ALL: [SpecialField; 6] = [
        Self::ArtifactId,
        Self::Name,
        Self::SystemCreatedBy,
        Self::SystemCreatedOn,
        Self::SystemLastModifiedBy,
        Self::SystemLastModifiedOn,
    ];

    /// Looks up a field name. `ArtifactID` matches case-insensitively, the
    /// others only exactly.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case(ARTIFACT_ID) {
            return Some(Self::ArtifactId);
        }
        match name {
            "Name" => Some(Self::Name),
            "SystemCreatedBy" => Some(Self::SystemCreatedBy),
            "SystemCreatedOn" => Some(Self::SystemCreatedOn),
            "SystemLastModifiedBy" => Some(Self::SystemLastModifiedBy),
            "SystemLastModifiedOn" => Some(Self::SystemLastModifiedOn),
            _ => None,
        }
    }

    /// Returns the property name for this field.
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::ArtifactId => ARTIFACT_ID,
            Self::Name => "Name",
            Self::SystemCreatedBy => "SystemCreatedBy",
            Self::SystemCreatedOn => "SystemCreatedOn",
            Self::SystemLastModifiedBy => "SystemLastModifiedBy",
            Self::SystemLastModifiedOn => "SystemLastModifiedOn",
        }
    }

    /// Returns the runtime member backing the property, or `None` if the
    /// field is not generated at all.
    #[must_use]
    pub const fn runtime_member(self) -> Option<&'static str> {
        match self {
            Self::ArtifactId => None,
            Self::Name => Some("TextIdentifier"),
            other => Some(other.property_name()),
        }
    }

    /// Returns true if the generated property has a setter.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Name)
    }

    /// Returns the property shape, or `None` if the field is not generated.
    #[must_use]
    pub const fn shape(self) -> Option<FieldShape> {
        let shape = match self {
            Self::ArtifactId => return None,
            Self::Name => shape_for(FieldType::FixedLength),
            Self::SystemCreatedBy | Self::SystemLastModifiedBy => shape_for(FieldType::User),
            Self::SystemCreatedOn | Self::SystemLastModifiedOn => shape_for(FieldType::Date),
        };
        Some(shape.direct())
    }
}
