//! Schema Module Tests
//!
//! Validates dataset schema construction and the derived filterable subset.
//!
//! ## Test Scopes
//! - **Filterable subset**: Ordering and content of the filterable field list.
//! - **Construction**: Definition-time validation of nonsensical schemas.
//! - **Lookup**: Field access by name.

#[cfg(test)]
mod tests {
    use crate::schema::{DatasetSchema, FieldDefinition, FieldType, SortOrder};

    fn sample_schema() -> DatasetSchema {
        DatasetSchema::new(
            "sample",
            vec![
                FieldDefinition::new("title", FieldType::Text),
                FieldDefinition::filterable("status", FieldType::Text),
                FieldDefinition::filterable("category", FieldType::Text),
                FieldDefinition::new("rank", FieldType::Integer),
            ],
            "rank",
            SortOrder::Desc,
        )
    }

    // ============================================================
    // FILTERABLE SUBSET
    // ============================================================

    #[test]
    fn test_filterable_fields_sorted_alphabetically() {
        let schema = sample_schema();

        // "status" is declared before "category" but the derived list is sorted.
        assert_eq!(schema.filterable_fields(), vec!["category", "status"]);
    }

    #[test]
    fn test_filterable_fields_independent_of_declaration_order() {
        let forward = DatasetSchema::new(
            "forward",
            vec![
                FieldDefinition::filterable("alpha", FieldType::Text),
                FieldDefinition::filterable("beta", FieldType::Text),
            ],
            "alpha",
            SortOrder::Asc,
        );
        let reversed = DatasetSchema::new(
            "reversed",
            vec![
                FieldDefinition::filterable("beta", FieldType::Text),
                FieldDefinition::filterable("alpha", FieldType::Text),
            ],
            "alpha",
            SortOrder::Asc,
        );

        assert_eq!(forward.filterable_fields(), reversed.filterable_fields());
    }

    #[test]
    fn test_filterable_fields_empty_when_none_marked() {
        let schema = DatasetSchema::new(
            "plain",
            vec![
                FieldDefinition::new("title", FieldType::Text),
                FieldDefinition::new("rank", FieldType::Integer),
            ],
            "rank",
            SortOrder::Asc,
        );

        assert!(schema.filterable_fields().is_empty());
    }

    // ============================================================
    // CONSTRUCTION-TIME VALIDATION
    // ============================================================

    #[test]
    #[should_panic(expected = "must have a scalar type")]
    fn test_filterable_object_list_field_panics() {
        DatasetSchema::new(
            "broken",
            vec![
                FieldDefinition::new("rank", FieldType::Integer),
                FieldDefinition::filterable("samples", FieldType::ObjectList),
            ],
            "rank",
            SortOrder::Asc,
        );
    }

    #[test]
    #[should_panic(expected = "not a defined field")]
    fn test_unknown_default_sort_field_panics() {
        DatasetSchema::new(
            "broken",
            vec![FieldDefinition::new("rank", FieldType::Integer)],
            "missing",
            SortOrder::Asc,
        );
    }

    // ============================================================
    // LOOKUP
    // ============================================================

    #[test]
    fn test_field_lookup_by_name() {
        let schema = sample_schema();

        let status = schema.field("status").expect("status should exist");
        assert!(status.filterable);
        assert_eq!(status.field_type, FieldType::Text);

        assert!(schema.field("nonexistent").is_none());
    }

    #[test]
    fn test_sort_order_wire_format() {
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");

        let parsed: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(parsed, SortOrder::Asc);
    }
}
