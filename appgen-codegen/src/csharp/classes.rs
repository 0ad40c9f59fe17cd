//! Class generation, one class per object.

use crate::csharp::naming::to_identifier;
use crate::csharp::properties::Property;
use crate::error::CodegenError;
use crate::options::WriterOptions;
use appgen_schema::{Application, ObjectDef};
use std::collections::HashSet;
use uuid::Uuid;

const CLASS_INDENT: &str = "    ";
const MEMBER_INDENT: &str = "        ";

/// Writer for object classes.
pub struct ClassWriter<'a> {
    options: &'a WriterOptions,
}

impl<'a> ClassWriter<'a> {
    /// Creates a new class writer.
    #[must_use]
    pub fn new(options: &'a WriterOptions) -> Self {
        Self { options }
    }

    /// Writes one class per object, in application order.
    ///
    /// Blacklisted objects contribute nothing, so the result may be empty.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if an object or field name
    /// yields no identifier, or an object GUID is malformed.
    pub fn write_classes(&self, app: &Application) -> Result<String, CodegenError> {
        let mut output = String::new();

        for object in &app.objects {
            if let Some(class) = self.write_class(object)? {
                output.push_str(&class);
            }
        }

        Ok(output)
    }

    /// Writes the class for one object, or `None` if the object is
    /// blacklisted.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` on unusable names or GUIDs.
    pub fn write_class(&self, object: &ObjectDef) -> Result<Option<String>, CodegenError> {
        let class_name = to_identifier(&object.name);
        if self.options.is_blacklisted(&object.name) || self.options.is_blacklisted(&class_name) {
            tracing::debug!("Skipping blacklisted object '{}'", object.name);
            return Ok(None);
        }
        if class_name.is_empty() {
            return Err(CodegenError::invalid_identifier("class", &object.name));
        }

        let mut output = String::new();

        if !object.guid.is_empty() {
            let guid = Uuid::parse_str(&object.guid)
                .map_err(|_| CodegenError::invalid_identifier("object guid", &object.guid))?;
            output.push_str(&format!("{CLASS_INDENT}[ObjectTypeGuid(\"{guid}\")]\n"));
        }

        let base_class = self.options.base_class_for(object.should_use_om_model);
        output.push_str(&format!(
            "{CLASS_INDENT}public partial class {class_name} : {base_class}\n"
        ));
        output.push_str(&format!("{CLASS_INDENT}{{\n"));

        let mut seen = HashSet::new();
        for field in &object.fields {
            let Some(property) = Property::for_field(field)? else {
                continue;
            };
            if property.name == class_name {
                tracing::warn!(
                    "Skipping field '{}': property name equals class name '{}'",
                    field.name,
                    class_name
                );
                continue;
            }
            if !seen.insert(property.name.clone()) {
                tracing::warn!(
                    "Skipping field '{}': duplicate property '{}' in class '{}'",
                    field.name,
                    property.name,
                    class_name
                );
                continue;
            }
            output.push_str(&property.render(self.options, MEMBER_INDENT));
        }

        output.push_str(&format!("{CLASS_INDENT}}}\n\n"));

        Ok(Some(output))
    }
}
