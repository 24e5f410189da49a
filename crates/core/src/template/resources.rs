//! Resource collections and table selection.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::error::TemplateError;
use crate::policy::AlarmPolicy;

/// Type discriminator of the resources that receive alarms.
pub const TABLE_RESOURCE_TYPE: &str = "AWS::DynamoDB::Table";

/// Property holding the physical table name.
pub const TABLE_NAME_PROPERTY: &str = "TableName";

/// A single resource definition read from a template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceEntry {
    /// The `Type` discriminator, if the definition has a string one.
    pub resource_type: Option<String>,
    /// The `Properties` map. Anything that is not a map reads as empty.
    pub properties: Map<String, Value>,
}

impl ResourceEntry {
    /// Creates an entry with the given type and properties.
    pub fn new(resource_type: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            resource_type: Some(resource_type.into()),
            properties,
        }
    }

    /// Creates a table entry with only a table name.
    pub fn table(table_name: impl Into<String>) -> Self {
        let mut properties = Map::new();
        properties.insert(
            TABLE_NAME_PROPERTY.to_string(),
            Value::String(table_name.into()),
        );
        Self::new(TABLE_RESOURCE_TYPE, properties)
    }

    /// Reads an entry from its template form (`{ "Type": ..., "Properties": {...} }`).
    pub fn from_value(value: &Value) -> Self {
        let resource_type = value
            .get("Type")
            .and_then(Value::as_str)
            .map(str::to_string);
        let properties = value
            .get("Properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self {
            resource_type,
            properties,
        }
    }

    /// Returns true if this entry is a table resource.
    pub fn is_table(&self) -> bool {
        self.resource_type.as_deref() == Some(TABLE_RESOURCE_TYPE)
    }

    /// The physical table name, if set as a string.
    pub fn table_name(&self) -> Option<&str> {
        self.properties
            .get(TABLE_NAME_PROPERTY)
            .and_then(Value::as_str)
    }
}

/// Resources keyed by their logical name.
///
/// Iteration is in lexical name order regardless of how the collection was
/// built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceCollection {
    entries: BTreeMap<String, ResourceEntry>,
}

impl ResourceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a template `Resources` section.
    pub fn from_value(value: &Value, path: &str) -> Result<Self, TemplateError> {
        let map = value
            .as_object()
            .ok_or_else(|| TemplateError::InvalidSection {
                path: path.to_string(),
            })?;

        Ok(map
            .iter()
            .map(|(name, entry)| (name.clone(), ResourceEntry::from_value(entry)))
            .collect())
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        entry: ResourceEntry,
    ) -> Option<ResourceEntry> {
        self.entries.insert(name.into(), entry)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, entry: ResourceEntry) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ResourceEntry)> for ResourceCollection {
    fn from_iter<T: IntoIterator<Item = (String, ResourceEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Table resources chosen for alarms, borrowed from their collection.
pub type Selection<'a> = BTreeMap<&'a str, &'a ResourceEntry>;

/// Selects the table resources whose logical name passes the policy filter.
///
/// Entries of any other type are never selected, whatever the filter says.
pub fn select_tables<'a>(
    collection: &'a ResourceCollection,
    policy: &AlarmPolicy,
) -> Selection<'a> {
    collection
        .iter()
        .filter(|(name, entry)| entry.is_table() && policy.matches(name))
        .collect()
}
