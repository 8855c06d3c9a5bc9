//! Path-keyed field schemas

use serde::Serialize;
use std::collections::HashMap;

use super::FieldType;

/// Highest field number the tag encoding can carry.
const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Declaration of one field path within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// Slash-joined field numbers from the message root, e.g. `1/2/3`
    pub path: &'static str,
    /// Semantic name the decoded values are stored under
    pub name: &'static str,
    /// Declared type of the value
    pub field_type: FieldType,
}

impl FieldInfo {
    pub const fn new(path: &'static str, name: &'static str, field_type: FieldType) -> Self {
        Self { path, name, field_type }
    }
}

/// Sparse mapping from field path to declaration.
///
/// Paths absent from the schema are skipped by the decoder, never decoded.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    /// Label used in diagnostics (usually the file kind)
    pub label: &'static str,
    fields: HashMap<&'static str, FieldInfo>,
}

impl FieldSchema {
    /// Build a schema and validate it.
    pub fn new(label: &'static str, table: &[FieldInfo]) -> crate::Result<Self> {
        let mut fields = HashMap::with_capacity(table.len());
        for info in table {
            if let Some(previous) = fields.insert(info.path, *info) {
                return Err(crate::ConvertError::Schema {
                    kind: label.to_string(),
                    reason: format!(
                        "path '{}' declared twice ('{}' and '{}')",
                        info.path, previous.name, info.name
                    ),
                });
            }
        }
        let schema = Self { label, fields };
        schema.validate()?;
        Ok(schema)
    }

    /// Build a schema from a table that is known to be valid.
    ///
    /// Later duplicates replace earlier ones; use [`FieldSchema::new`] for
    /// untrusted tables.
    pub fn from_table(label: &'static str, table: &[FieldInfo]) -> Self {
        let fields = table.iter().map(|info| (info.path, *info)).collect();
        Self { label, fields }
    }

    /// Validate path syntax and nesting.
    ///
    /// Every segment must be a legal field number and every non-root path
    /// must hang off a parent declared as an embedded message.
    pub fn validate(&self) -> crate::Result<()> {
        for (path, info) in &self.fields {
            if info.name.is_empty() {
                return Err(self.invalid(format!("path '{}' has an empty name", path)));
            }

            for segment in path.split('/') {
                match segment.parse::<u32>() {
                    Ok(number) if (1..=MAX_FIELD_NUMBER).contains(&number) => {}
                    _ => {
                        return Err(self.invalid(format!(
                            "path '{}' has invalid segment '{}'",
                            path, segment
                        )));
                    }
                }
            }

            if let Some((parent, _)) = path.rsplit_once('/') {
                match self.fields.get(parent) {
                    Some(parent_info) if parent_info.field_type.is_message() => {}
                    Some(parent_info) => {
                        return Err(self.invalid(format!(
                            "parent '{}' of '{}' is declared {:?}, not an embedded message",
                            parent, path, parent_info.field_type
                        )));
                    }
                    None => {
                        return Err(self.invalid(format!(
                            "parent '{}' of '{}' is not declared",
                            parent, path
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> crate::ConvertError {
        crate::ConvertError::Schema { kind: self.label.to_string(), reason }
    }

    /// Look up the declaration for a field path (O(1)).
    pub fn get(&self, path: &str) -> Option<&FieldInfo> {
        self.fields.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    /// Number of declared paths.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
