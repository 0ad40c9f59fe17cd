//! Schema model definitions.
//!
//! This module contains the in-memory description of an application export:
//! objects with their fields, rules and layouts, plus the application's tabs
//! and scripts. The loader builds the whole tree in one pass and nothing
//! mutates it afterwards.

use std::fmt;

/// Identity pair shared by every named artifact in an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArtifactDef {
    /// Artifact GUID as written in the document.
    pub guid: String,
    /// Display name.
    pub name: String,
}

impl ArtifactDef {
    /// Creates a new artifact definition.
    #[must_use]
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

/// Application tab.
pub type Tab = ArtifactDef;

/// Application script.
pub type Script = ArtifactDef;

/// Rule attached to an object.
pub type ObjectRule = ArtifactDef;

/// Layout attached to an object.
pub type Layout = ArtifactDef;

/// Field type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Fixed-length text.
    FixedLength,
    /// Whole number.
    WholeNumber,
    /// Date and time.
    Date,
    /// Yes/no flag.
    YesNo,
    /// Long text.
    LongText,
    /// Single choice.
    SingleChoice,
    /// Decimal number.
    Decimal,
    /// Currency amount.
    Currency,
    /// Multiple choice.
    MultipleChoice,
    /// File.
    File,
    /// Reference to a single object.
    SingleObject,
    /// Reference to a user.
    User,
    /// Reference to multiple objects.
    MultipleObject,
}

impl FieldType {
    /// All field types in code order.
    pub const ALL: [FieldType; 13] = [
        Self::FixedLength,
        Self::WholeNumber,
        Self::Date,
        Self::YesNo,
        Self::LongText,
        Self::SingleChoice,
        Self::Decimal,
        Self::Currency,
        Self::MultipleChoice,
        Self::File,
        Self::SingleObject,
        Self::User,
        Self::MultipleObject,
    ];

    /// Converts a `FieldTypeId` code into a field type.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::FixedLength),
            1 => Some(Self::WholeNumber),
            2 => Some(Self::Date),
            3 => Some(Self::YesNo),
            4 => Some(Self::LongText),
            5 => Some(Self::SingleChoice),
            6 => Some(Self::Decimal),
            7 => Some(Self::Currency),
            8 => Some(Self::MultipleChoice),
            9 => Some(Self::File),
            10 => Some(Self::SingleObject),
            11 => Some(Self::User),
            13 => Some(Self::MultipleObject),
            _ => None,
        }
    }

    /// Returns the `FieldTypeId` code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::FixedLength => 0,
            Self::WholeNumber => 1,
            Self::Date => 2,
            Self::YesNo => 3,
            Self::LongText => 4,
            Self::SingleChoice => 5,
            Self::Decimal => 6,
            Self::Currency => 7,
            Self::MultipleChoice => 8,
            Self::File => 9,
            Self::SingleObject => 10,
            Self::User => 11,
            Self::MultipleObject => 13,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field GUID; empty for well-known fields.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Field type.
    pub field_type: FieldType,
    /// True for fields listed under `SystemFields`.
    pub is_system: bool,
    /// Maximum length, 0 when unset.
    pub max_length: i32,
    /// Choice values for coded fields.
    pub choices: Vec<ArtifactDef>,
}

impl Field {
    /// Creates a new field definition without a GUID.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType, is_system: bool) -> Self {
        Self {
            guid: String::new(),
            name: name.into(),
            field_type,
            is_system,
            max_length: 0,
            choices: Vec::new(),
        }
    }

    /// Sets the field GUID.
    #[must_use]
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = guid.into();
        self
    }

    /// Adds a choice value.
    #[must_use]
    pub fn with_choice(mut self, choice: ArtifactDef) -> Self {
        self.choices.push(choice);
        self
    }

    /// Returns true if the field has choice values.
    #[must_use]
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Object definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDef {
    /// Object GUID.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Ordinary fields followed by system fields.
    pub fields: Vec<Field>,
    /// Object rules.
    pub object_rules: Vec<ObjectRule>,
    /// Layouts.
    pub layouts: Vec<Layout>,
    /// Whether generation uses the alternate object-manager access model.
    pub should_use_om_model: bool,
}

impl ObjectDef {
    /// Creates a new empty object definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the object GUID.
    #[must_use]
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = guid.into();
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Iterates over fields that are not system fields.
    pub fn ordinary_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_system)
    }

    /// Iterates over system fields.
    pub fn system_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_system)
    }
}

/// Application definition, the root of the schema model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    /// Application GUID.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Objects in document order.
    pub objects: Vec<ObjectDef>,
    /// Tabs in document order.
    pub tabs: Vec<Tab>,
    /// Scripts in document order.
    pub scripts: Vec<Script>,
}

impl Application {
    /// Creates a new empty application.
    #[must_use]
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds an object.
    #[must_use]
    pub fn with_object(mut self, object: ObjectDef) -> Self {
        self.objects.push(object);
        self
    }

    /// Looks up an object by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_codes() {
        for field_type in FieldType::ALL {
            assert_eq!(FieldType::from_code(field_type.code()), Some(field_type));
        }
        assert_eq!(FieldType::from_code(12), None);
        assert_eq!(FieldType::from_code(-1), None);
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::LongText.to_string(), "LongText");
    }

    #[test]
    fn test_field_builder() {
        let field = Field::new("Status", FieldType::SingleChoice, false)
            .with_guid("8f0f6a39-1b3a-4c4e-9a3c-6f1d2e7b5a10")
            .with_choice(ArtifactDef::new("c1", "Open"));
        assert!(field.has_choices());
        assert_eq!(field.max_length, 0);
        assert!(!Field::new("Plain", FieldType::FixedLength, false).has_choices());
    }

    #[test]
    fn test_object_field_partition() {
        let object = ObjectDef::new("Matter")
            .with_field(Field::new("Client", FieldType::SingleObject, false))
            .with_field(Field::new("SystemCreatedBy", FieldType::User, true));
        assert_eq!(object.ordinary_fields().count(), 1);
        assert_eq!(object.system_fields().count(), 1);
        assert!(object.object_rules.is_empty());
        assert!(object.layouts.is_empty());
        assert!(!object.should_use_om_model);
    }

    #[test]
    fn test_application_object_lookup() {
        let app = Application::new("g", "App").with_object(ObjectDef::new("Matter"));
        assert!(app.object("Matter").is_some());
        assert!(app.object("matter").is_none());
    }
}
