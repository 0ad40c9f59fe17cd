//! Application XML loader.
//!
//! This module turns an exported application document into the schema
//! model. Missing required elements abort the whole load; a field that
//! fails to parse is logged and left out.

use crate::error::ParseError;
use crate::model::{Application, ArtifactDef, Field, FieldType, ObjectDef};
use crate::overrides::OverrideSet;
use crate::xml::Element;
use std::path::Path;
use uuid::Uuid;

/// Parses an application document.
///
/// The override document is read only if `override_path` names an existing
/// file; otherwise no object is overridden.
///
/// # Arguments
/// * `xml` - Application XML content
/// * `override_path` - Optional path to the override document
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or a required element is
/// missing.
pub fn parse_application(
    xml: &str,
    override_path: Option<&Path>,
) -> Result<Application, ParseError> {
    let overrides = match override_path {
        Some(path) => OverrideSet::load(path)?,
        None => OverrideSet::new(),
    };
    parse_application_with_overrides(xml, &overrides)
}

/// Parses an application document against an already loaded override set.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or a required element is
/// missing.
pub fn parse_application_with_overrides(
    xml: &str,
    overrides: &OverrideSet,
) -> Result<Application, ParseError> {
    let root = Element::parse(xml)?;
    if root.name() != "Application" {
        return Err(ParseError::missing_element("Application", "document"));
    }

    let mut app = Application::new(root.required_text("Guid")?, root.required_text("Name")?);

    for node in root.descendants_named("Object") {
        app.objects.push(parse_object(node, overrides)?);
    }

    for node in root.descendants_named("Tab") {
        app.tabs.push(parse_artifact(node)?);
    }

    let scripts = root
        .descendants_named("ApplicationScripts")
        .next()
        .ok_or_else(|| ParseError::missing_element("ApplicationScripts", "Application"))?;
    for node in scripts.children_named("ScriptElement") {
        app.scripts.push(parse_artifact(node)?);
    }

    tracing::debug!(
        "Parsed application '{}': {} objects, {} tabs, {} scripts",
        app.name,
        app.objects.len(),
        app.tabs.len(),
        app.scripts.len()
    );

    Ok(app)
}

/// Parses an object definition.
fn parse_object(node: &Element, overrides: &OverrideSet) -> Result<ObjectDef, ParseError> {
    let name = node.required_text("Name")?;
    let guid = node.required_text("Guid")?;
    let parsed = Uuid::parse_str(guid).map_err(|_| ParseError::invalid_value("Guid", guid))?;

    let mut object = ObjectDef::new(name).with_guid(guid);
    object.should_use_om_model = overrides.contains(&parsed);

    let ordinary = node.require_child("Fields")?.children_named("Field");
    let system = node.require_child("SystemFields")?.children_named("SystemField");
    let candidates = ordinary.map(|f| (f, false)).chain(system.map(|f| (f, true)));

    for (field_node, is_system) in candidates {
        match parse_field(field_node, is_system) {
            Ok(field) => object.fields.push(field),
            Err(e) => tracing::warn!("Skipping field in object '{}': {}", object.name, e),
        }
    }

    object.object_rules = parse_section(node, "ObjectRules", "ObjectRule")?;
    object.layouts = parse_section(node, "Layouts", "Layout")?;

    Ok(object)
}

/// Parses an optional `<Section><Item/>...</Section>` list of artifacts.
fn parse_section(
    node: &Element,
    section: &str,
    item: &str,
) -> Result<Vec<ArtifactDef>, ParseError> {
    match node.child(section) {
        Some(list) => list.children_named(item).map(parse_artifact).collect(),
        None => Ok(Vec::new()),
    }
}

/// Parses a field definition.
fn parse_field(node: &Element, is_system: bool) -> Result<Field, ParseError> {
    let guid = node.required_text("Guid")?;
    let name = node.required_text("DisplayName")?;
    let type_id = node.required_text("FieldTypeId")?;
    let field_type = type_id
        .parse()
        .ok()
        .and_then(FieldType::from_code)
        .ok_or_else(|| ParseError::invalid_value("FieldTypeId", type_id))?;

    let mut field = Field::new(name, field_type, is_system).with_guid(guid);
    field.max_length = node
        .optional_text("MaxLength")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    if let Some(codes) = node.child("Codes") {
        for code in codes.children_named("Code") {
            field.choices.push(parse_artifact(code)?);
        }
    }

    Ok(field)
}

/// Parses the `Guid`/`Name` identity pair of an artifact element.
fn parse_artifact(node: &Element) -> Result<ArtifactDef, ParseError> {
    Ok(ArtifactDef::new(
        node.required_text("Guid")?,
        node.required_text("Name")?,
    ))
}
