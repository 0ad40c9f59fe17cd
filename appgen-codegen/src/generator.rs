//! Source file generation.
//!
//! Wraps the class blocks produced by [`ClassWriter`] in the file header,
//! `using` directives and namespace.

use crate::csharp::{ClassWriter, comment_text};
use crate::error::CodegenError;
use crate::options::WriterOptions;
use appgen_schema::Application;

/// Generator for a complete source file.
pub struct Generator<'a> {
    app: &'a Application,
    options: &'a WriterOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(app: &'a Application, options: &'a WriterOptions) -> Self {
        Self { app, options }
    }

    /// Generates the source file.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if the namespace or any
    /// class or property name is unusable.
    pub fn generate(&self) -> Result<String, CodegenError> {
        validate_namespace(&self.options.namespace)?;

        let mut output = String::new();

        output.push_str("// <auto-generated>\n");
        output.push_str(&format!(
            "//     Generated by appgen from application '{}' ({}).\n",
            comment_text(&self.app.name),
            comment_text(&self.app.guid)
        ));
        output.push_str("//     Changes to this file will be lost when the code is regenerated.\n");
        output.push_str("// </auto-generated>\n\n");

        for using in &self.options.usings {
            output.push_str(&format!("using {};\n", using));
        }
        if !self.options.usings.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!("namespace {}\n{{\n", self.options.namespace));
        let classes = ClassWriter::new(self.options).write_classes(self.app)?;
        if !classes.is_empty() {
            output.push_str(classes.trim_end_matches('\n'));
            output.push('\n');
        }
        output.push_str("}\n");

        Ok(output)
    }
}

/// Checks that every dotted segment of a namespace is an identifier.
fn validate_namespace(namespace: &str) -> Result<(), CodegenError> {
    let valid = namespace.split('.').all(|segment| {
        !segment.is_empty()
            && !segment.starts_with(|c: char| c.is_ascii_digit())
            && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    });
    if valid {
        Ok(())
    } else {
        Err(CodegenError::invalid_identifier("namespace", namespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appgen_schema::{Field, FieldType, ObjectDef};

    fn sample_app() -> Application {
        Application::new("7d6c5b4a-3928-4716-a5b4-c3d2e1f0a9b8", "Case Tools")
            .with_object(
                ObjectDef::new("Matter").with_field(Field::new("Name", FieldType::FixedLength, true)),
            )
            .with_object(ObjectDef::new("Custodian"))
    }

    #[test]
    fn test_generate_file() {
        let app = sample_app();
        let options = WriterOptions::default();
        let text = Generator::new(&app, &options).generate().expect("generate");

        assert!(text.starts_with("// <auto-generated>\n"));
        assert!(text.contains("'Case Tools' (7d6c5b4a-3928-4716-a5b4-c3d2e1f0a9b8)"));
        assert!(text.contains("using System;\nusing System.Collections.Generic;\n\n"));
        assert!(text.contains("namespace Application.Models\n{\n"));
        assert!(text.contains("    public partial class Matter : BaseDto\n"));
        assert!(text.contains("    public partial class Custodian : BaseDto\n"));
        assert!(text.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_generate_without_classes() {
        let app = Application::new("g", "Empty").with_object(ObjectDef::new("Field"));
        let options = WriterOptions::new().with_namespace("Acme");
        let text = Generator::new(&app, &options).generate().expect("generate");
        assert!(text.ends_with("namespace Acme\n{\n}\n"));
    }

    #[test]
    fn test_no_usings() {
        let app = Application::default();
        let mut options = WriterOptions::default();
        options.usings.clear();
        let text = Generator::new(&app, &options).generate().expect("generate");
        assert!(!text.contains("using"));
    }

    #[test]
    fn test_invalid_namespace() {
        let app = sample_app();
        for namespace in ["", "Acme..Models", "1Acme", "Acme Models"] {
            let options = WriterOptions::new().with_namespace(namespace);
            let err = Generator::new(&app, &options).generate().unwrap_err();
            assert!(matches!(err, CodegenError::InvalidIdentifier { .. }));
        }
    }

    #[test]
    fn test_deterministic() {
        let app = sample_app();
        let options = WriterOptions::default();
        let generator = Generator::new(&app, &options);
        assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
    }

    #[test]
    fn test_multi_line_application_name_stays_in_header() {
        let app = Application::new("7d6c5b4a-3928-4716-a5b4-c3d2e1f0a9b8", "Case\nTools");
        let options = WriterOptions::default();
        let text = Generator::new(&app, &options).generate().expect("generate");
        assert!(text.contains("//     Generated by appgen from application 'Case Tools' ("));
        assert!(text.lines().take_while(|l| !l.is_empty()).all(|l| l.starts_with("//")));
    }
}
