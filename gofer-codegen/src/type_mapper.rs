//! Type mapping between field type tags and Go types.

use gofer_core::FieldType;

/// Trait for mapping field types to language-specific type strings.
pub trait TypeMapper {
    /// Map a field type to a language-specific type string
    fn map_field_type(&self, field_type: FieldType) -> &'static str;

    /// Package that must be imported to use the mapped type, if any
    fn import_for(&self, field_type: FieldType) -> Option<&'static str>;
}

/// Go type mapper implementation
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn map_field_type(&self, field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "time.Time",
        }
    }

    fn import_for(&self, field_type: FieldType) -> Option<&'static str> {
        match field_type {
            FieldType::Timestamp => Some("time"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_type_mapper() {
        let mapper = GoTypeMapper;

        assert_eq!(mapper.map_field_type(FieldType::String), "string");
        assert_eq!(mapper.map_field_type(FieldType::Int), "int");
        assert_eq!(mapper.map_field_type(FieldType::Bool), "bool");
        assert_eq!(mapper.map_field_type(FieldType::Timestamp), "time.Time");
    }

    #[test]
    fn test_imports() {
        let mapper = GoTypeMapper;

        assert_eq!(mapper.import_for(FieldType::Timestamp), Some("time"));
        assert_eq!(mapper.import_for(FieldType::String), None);
    }
}
