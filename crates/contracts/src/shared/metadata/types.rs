//! Field descriptors and the ordered field set attached to entities

use serde::{Deserialize, Serialize};

use super::field_type::FieldType;

// ============================================================================
// Field-level metadata
// ============================================================================

/// Declared shape of one data attribute of an entity or a virtual table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    /// Position used for stable presentation
    #[serde(default)]
    pub order: u32,
    /// Field may hold values of several types
    #[serde(default)]
    pub composite: bool,
    /// Field is the human-readable presentation of a value, not the value itself
    #[serde(default)]
    pub presentation: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            order: 0,
            composite: false,
            presentation: false,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    pub fn composite(mut self) -> Self {
        self.composite = true;
        self
    }

    pub fn presentation(mut self) -> Self {
        self.presentation = true;
        self
    }
}

// ============================================================================
// Field set
// ============================================================================

/// Ordered collection of fields, unique by name.
///
/// Children of an entity are attached here after reconstruction; the set
/// keeps insertion order and refuses a second field with the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Returns `false` if a field with that name is already present.
    pub fn insert(&mut self, field: FieldDescriptor) -> bool {
        if self.contains(&field.name) {
            return false;
        }
        self.fields.push(field);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn into_vec(self) -> Vec<FieldDescriptor> {
        self.fields
    }
}

impl FromIterator<FieldDescriptor> for FieldSet {
    /// Collects fields, skipping names already seen
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
