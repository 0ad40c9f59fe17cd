//! Field type to property shape table.
//!
//! This is the only place target type names are spelled out. The table is an
//! exhaustive `match`, so every [`FieldType`] has a shape and adding a new
//! field type without a mapping fails to compile.

use appgen_schema::FieldType;

/// Target type for text and any type without a dedicated mapping.
pub const STRING_TYPE: &str = "string";
/// Target type for dates.
pub const DATE_TYPE: &str = "DateTime?";
/// Target type for user references.
pub const USER_TYPE: &str = "User";

/// How a generated property reaches its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// Through the GUID-keyed `GetValue`/`SetValue` pair.
    GuidValue,
    /// Through a property of the runtime artifact.
    Direct,
}

/// Generated property shape for a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldShape {
    /// Target type name.
    pub target_type: &'static str,
    /// Whether the field holds choice values.
    pub is_choice_valued: bool,
    /// Access pattern.
    pub accessor: Accessor,
}

impl FieldShape {
    const fn scalar(target_type: &'static str) -> Self {
        Self {
            target_type,
            is_choice_valued: false,
            accessor: Accessor::GuidValue,
        }
    }

    const fn choice(target_type: &'static str) -> Self {
        Self {
            target_type,
            is_choice_valued: true,
            accessor: Accessor::GuidValue,
        }
    }

    /// Returns the same shape with a direct accessor.
    #[must_use]
    pub const fn direct(self) -> Self {
        Self {
            accessor: Accessor::Direct,
            ..self
        }
    }
}

/// Returns the property shape for a field type.
#[must_use]
pub const fn shape_for(field_type: FieldType) -> FieldShape {
    match field_type {
        FieldType::FixedLength | FieldType::LongText => FieldShape::scalar(STRING_TYPE),
        FieldType::Date => FieldShape::scalar(DATE_TYPE),
        FieldType::User => FieldShape::scalar(USER_TYPE),
        FieldType::SingleChoice | FieldType::MultipleChoice => FieldShape::choice(STRING_TYPE),
        FieldType::WholeNumber
        | FieldType::YesNo
        | FieldType::Decimal
        | FieldType::Currency
        | FieldType::File
        | FieldType::SingleObject
        | FieldType::MultipleObject => FieldShape::scalar(STRING_TYPE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_mappings() {
        assert_eq!(shape_for(FieldType::Date).target_type, "DateTime?");
        assert_eq!(shape_for(FieldType::User).target_type, "User");
        assert_eq!(shape_for(FieldType::FixedLength).target_type, "string");
        assert_eq!(shape_for(FieldType::LongText).target_type, "string");
    }

    #[test]
    fn test_every_type_has_a_shape() {
        for field_type in FieldType::ALL {
            let shape = shape_for(field_type);
            assert!(!shape.target_type.is_empty());
            assert_eq!(shape.accessor, Accessor::GuidValue);
        }
    }

    #[test]
    fn test_choice_types() {
        let choice_types: Vec<FieldType> = FieldType::ALL
            .into_iter()
            .filter(|t| shape_for(*t).is_choice_valued)
            .collect();
        assert_eq!(
            choice_types,
            vec![FieldType::SingleChoice, FieldType::MultipleChoice]
        );
    }

    #[test]
    fn test_default_shape_is_string() {
        assert_eq!(shape_for(FieldType::WholeNumber).target_type, STRING_TYPE);
        assert_eq!(shape_for(FieldType::MultipleObject).target_type, STRING_TYPE);
    }

    #[test]
    fn test_direct() {
        let shape = shape_for(FieldType::User).direct();
        assert_eq!(shape.accessor, Accessor::Direct);
        assert_eq!(shape.target_type, USER_TYPE);
    }
}
