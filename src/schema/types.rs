use serde::{Deserialize, Serialize};

/// Sort direction accepted by the search parameters and the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Semantic type of an indexed field.
///
/// Filterable fields must be scalar: filters are single-value exact-match
/// clauses, which make no sense against nested objects or object lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Text,
    /// An object whose values are all strings (e.g. a phylogeny tree level map).
    StringMap,
    /// A list of objects with optional string values (e.g. sample records).
    ObjectList,
}

impl FieldType {
    pub fn is_scalar(self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Text)
    }
}

/// A single named, typed field of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub field_type: FieldType,
    pub filterable: bool,
}

impl FieldDefinition {
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            filterable: false,
        }
    }

    pub fn filterable(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            filterable: true,
        }
    }
}

/// A dataset definition: its index name, ordered field list and default sort.
///
/// Constructed once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct DatasetSchema {
    pub name: &'static str,
    pub fields: Vec<FieldDefinition>,
    pub default_sort_field: &'static str,
    pub default_sort_order: SortOrder,
}

impl DatasetSchema {
    /// Builds a schema, validating the definition itself.
    ///
    /// # Panics
    /// Panics if a filterable field has a non-scalar type or the default sort
    /// field is not part of the field list. Schemas are static program data, so
    /// these are startup failures, never request-time errors.
    pub fn new(
        name: &'static str,
        fields: Vec<FieldDefinition>,
        default_sort_field: &'static str,
        default_sort_order: SortOrder,
    ) -> Self {
        for field in &fields {
            if field.filterable && !field.field_type.is_scalar() {
                panic!(
                    "dataset {}: filterable field {} must have a scalar type",
                    name, field.name
                );
            }
        }
        if !fields.iter().any(|f| f.name == default_sort_field) {
            panic!(
                "dataset {}: default sort field {} is not a defined field",
                name, default_sort_field
            );
        }

        Self {
            name,
            fields,
            default_sort_field,
            default_sort_order,
        }
    }

    /// Names of the filterable fields, sorted alphabetically.
    ///
    /// The sort keeps filter application and aggregation listing deterministic
    /// and independent of field declaration order.
    pub fn filterable_fields(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|f| f.filterable)
            .map(|f| f.name)
            .collect();
        names.sort_unstable();
        names
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}
