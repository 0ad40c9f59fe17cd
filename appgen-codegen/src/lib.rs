//! # appgen Codegen
//!
//! Class generation from application XML exports.
//!
//! This crate provides:
//! - The field type to property shape table
//! - One C# class per object, one property per field
//! - Source file generation around the class blocks

pub mod csharp;
pub mod error;
pub mod generator;
pub mod options;
pub mod type_map;

pub use csharp::ClassWriter;
pub use error::CodegenError;
pub use generator::Generator;
pub use options::WriterOptions;
pub use type_map::{Accessor, FieldShape, shape_for};

use std::path::Path;

/// Generates a source file from application XML.
///
/// # Arguments
/// * `xml` - Application XML content
/// * `override_path` - Optional path to the override document
/// * `options` - Generation options
///
/// # Returns
/// Generated source text.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(
    xml: &str,
    override_path: Option<&Path>,
    options: &WriterOptions,
) -> Result<String, CodegenError> {
    let app = appgen_schema::parse_application(xml, override_path)?;
    Generator::new(&app, options).generate()
}

/// Generates a source file from an application XML file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &Path,
    override_path: Option<&Path>,
    options: &WriterOptions,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, override_path, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const APP_XML: &str = r#"<Application>
    <Guid>7d6c5b4a-3928-4716-a5b4-c3d2e1f0a9b8</Guid>
    <Name>Case Tools</Name>
    <Object>
        <Guid>5a1e5c7e-3d2b-4c8a-9f10-2b3c4d5e6f70</Guid>
        <Name>Matter</Name>
        <Fields>
            <Field><Guid></Guid><DisplayName>ArtifactID</DisplayName><FieldTypeId>1</FieldTypeId></Field>
            <Field><Guid></Guid><DisplayName>Name</DisplayName><FieldTypeId>0</FieldTypeId></Field>
            <Field><Guid>2a3f1a3e-8c53-4a4c-9a3b-7b4c5d6e7f80</Guid><DisplayName>Extracted Text</DisplayName><FieldTypeId>4</FieldTypeId></Field>
        </Fields>
        <SystemFields>
            <SystemField><Guid></Guid><DisplayName>SystemCreatedOn</DisplayName><FieldTypeId>2</FieldTypeId></SystemField>
        </SystemFields>
    </Object>
    <Object>
        <Guid>0b9a8c7d-6e5f-4a3b-8c2d-1e0f9a8b7c6d</Guid>
        <Name>Field</Name>
        <Fields/>
        <SystemFields/>
    </Object>
    <ApplicationScripts/>
</Application>"#;

    #[test]
    fn test_generate_from_xml() {
        let text = generate_from_xml(APP_XML, None, &WriterOptions::default()).expect("generate");
        assert!(text.contains("public partial class Matter : BaseDto"));
        assert!(!text.contains("class Field"));
        assert!(!text.contains("ArtifactID"));
        assert!(text.contains("base.Artifact.TextIdentifier"));
        assert!(text.contains("GetValue<string>(Guid.Parse(FieldGuids.ExtractedText))"));
        assert!(text.contains("public DateTime? SystemCreatedOn { get { return base.Artifact.SystemCreatedOn; } }"));
    }

    #[test]
    fn test_generate_with_override() {
        let mut overrides = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            overrides,
            r#"<overrides><object guid="5a1e5c7e-3d2b-4c8a-9f10-2b3c4d5e6f70" override="true"/></overrides>"#
        )
        .expect("write");
        let text = generate_from_xml(APP_XML, Some(overrides.path()), &WriterOptions::default())
            .expect("generate");
        assert!(text.contains("public partial class Matter : BaseOMDto"));
    }

    #[test]
    fn test_generate_from_file() {
        let mut input = tempfile::NamedTempFile::new().expect("tempfile");
        input.write_all(APP_XML.as_bytes()).expect("write");
        let from_file =
            generate_from_file(input.path(), None, &WriterOptions::default()).expect("generate");
        let from_xml = generate_from_xml(APP_XML, None, &WriterOptions::default()).expect("generate");
        assert_eq!(from_file, from_xml);
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = generate_from_file(&dir.path().join("app.xml"), None, &WriterOptions::default())
            .unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = generate_from_xml("<Application/>", None, &WriterOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::Parse(_)));
    }
}
