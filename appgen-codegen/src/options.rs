//! Generation options.

/// Settings for the generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Namespace wrapping the generated classes.
    pub namespace: String,
    /// Base class for ordinary objects.
    pub base_class: String,
    /// Base class for objects using the object-manager model.
    pub om_base_class: String,
    /// Class holding one GUID constant per field name.
    pub guid_class: String,
    /// Expression giving access to the runtime artifact.
    pub artifact_accessor: String,
    /// Object names that never produce a class (compared case-insensitively).
    pub class_blacklist: Vec<String>,
    /// `using` directives written at the top of a generated file.
    pub usings: Vec<String>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            namespace: "Application.Models".to_string(),
            base_class: "BaseDto".to_string(),
            om_base_class: "BaseOMDto".to_string(),
            guid_class: "FieldGuids".to_string(),
            artifact_accessor: "base.Artifact".to_string(),
            class_blacklist: vec!["Field".to_string()],
            usings: vec!["System".to_string(), "System.Collections.Generic".to_string()],
        }
    }
}

impl WriterOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the base class for ordinary objects.
    #[must_use]
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    /// Sets the base class for object-manager objects.
    #[must_use]
    pub fn with_om_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.om_base_class = base_class.into();
        self
    }

    /// Sets the GUID constant class name.
    #[must_use]
    pub fn with_guid_class(mut self, guid_class: impl Into<String>) -> Self {
        self.guid_class = guid_class.into();
        self
    }

    /// Adds a name to the class blacklist.
    #[must_use]
    pub fn with_blacklisted(mut self, name: impl Into<String>) -> Self {
        self.class_blacklist.push(name.into());
        self
    }

    /// Returns true if an object with this name must not produce a class.
    #[must_use]
    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.class_blacklist
            .iter()
            .any(|b| b.eq_ignore_ascii_case(name))
    }

    /// Returns the base class for an object.
    #[must_use]
    pub fn base_class_for(&self, use_om_model: bool) -> &str {
        if use_om_model {
            &self.om_base_class
        } else {
            &self.base_class
        }
    }
}
