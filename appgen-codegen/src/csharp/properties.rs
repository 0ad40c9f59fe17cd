//! Property generation.

use crate::csharp::naming::{doc_text, to_identifier};
use crate::csharp::special::{ARTIFACT_ID, SpecialField};
use crate::error::CodegenError;
use crate::options::WriterOptions;
use crate::type_map::{Accessor, FieldShape, shape_for};
use appgen_schema::Field;

/// A property ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property identifier.
    pub name: String,
    /// Type and access pattern.
    pub shape: FieldShape,
    /// Runtime member for direct accessors.
    pub member: Option<&'static str>,
    /// Whether a setter is generated.
    pub writable: bool,
    /// Choice names, listed in a doc comment for choice-valued fields.
    pub choices: Vec<String>,
}

impl Property {
    /// Builds the property for a field, or `None` if the field is not
    /// generated.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if the display name yields
    /// no usable identifier.
    pub fn for_field(field: &Field) -> Result<Option<Self>, CodegenError> {
        if let Some(special) = SpecialField::lookup(&field.name) {
            let Some(shape) = special.shape() else {
                return Ok(None);
            };
            return Ok(Some(Self {
                name: special.property_name().to_string(),
                shape,
                member: special.runtime_member(),
                writable: special.is_writable(),
                choices: Vec::new(),
            }));
        }

        let name = to_identifier(&field.name);
        if name.is_empty() {
            return Err(CodegenError::invalid_identifier("property", &field.name));
        }
        if name.eq_ignore_ascii_case(ARTIFACT_ID) {
            return Ok(None);
        }

        let shape = shape_for(field.field_type);
        let choices = if shape.is_choice_valued {
            field.choices.iter().map(|c| doc_text(&c.name)).collect()
        } else {
            Vec::new()
        };

        Ok(Some(Self {
            name,
            shape,
            member: None,
            writable: true,
            choices,
        }))
    }

    /// Renders the property as indented source lines.
    #[must_use]
    pub fn render(&self, options: &WriterOptions, indent: &str) -> String {
        let mut output = String::new();
        let artifact = &options.artifact_accessor;
        let ty = self.shape.target_type;
        let name = &self.name;

        if !self.choices.is_empty() {
            output.push_str(&format!(
                "{indent}/// <summary>Choices: {}</summary>\n",
                self.choices.join(", ")
            ));
        }

        let (getter, setter) = match (self.shape.accessor, self.member) {
            (Accessor::Direct, Some(member)) => (
                format!("return {artifact}.{member};"),
                format!("{artifact}.{member} = value;"),
            ),
            _ => {
                let key = format!("Guid.Parse({}.{name})", options.guid_class);
                (
                    format!("return {artifact}.GetValue<{ty}>({key});"),
                    format!("{artifact}.SetValue({key}, value);"),
                )
            }
        };

        output.push_str(&format!("{indent}public {ty} {name} {{ get {{ {getter} }} "));
        if self.writable {
            output.push_str(&format!("set {{ {setter} }} "));
        }
        output.push_str("}\n");

        output
    }
}
