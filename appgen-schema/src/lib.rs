//! # appgen Schema
//!
//! Application XML loader and schema model.
//!
//! This crate provides:
//! - Parsing of exported application documents
//! - The schema model (objects, fields, tabs, scripts, rules, layouts)
//! - Object-manager override sets
//! - A small element tree with required/optional lookups

pub mod error;
pub mod model;
pub mod overrides;
pub mod parser;
pub mod xml;

pub use error::ParseError;
pub use model::{
    Application, ArtifactDef, Field, FieldType, Layout, ObjectDef, ObjectRule, Script, Tab,
};
pub use overrides::OverrideSet;
pub use parser::{parse_application, parse_application_with_overrides};
