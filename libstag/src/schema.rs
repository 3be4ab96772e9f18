//! Struct schemas: feeding field tag strings through the parser.
//!
//! There is no runtime reflection here. A [`StructSchema`] is an explicit,
//! ordered description of a struct's fields and their tag strings, supplied
//! by the caller (typically written once next to the type, or emitted by a
//! code-generation step). [`parse_struct`] walks that description and parses
//! every tag carried under one tag key.

use crate::definition::Definition;
use crate::error::Result;
use crate::parser;
use std::collections::HashMap;

/// One field's tag strings, keyed by tag name.
///
/// A field may carry tags under several keys, e.g. `validate` and `json`;
/// [`parse_struct`] selects one key and ignores the rest.
#[derive(Debug, Clone)]
pub struct FieldTags {
    name: String,
    tags: Vec<(String, String)>,
}

impl FieldTags {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tags: Vec::new(),
        }
    }

    /// Attach a tag string under a key.
    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push((key.to_string(), value.to_string()));
        self
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag string under a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An ordered description of a struct's tagged fields.
#[derive(Debug, Clone)]
pub struct StructSchema {
    name: String,
    fields: Vec<FieldTags>,
}

impl StructSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    /// Append a field description.
    pub fn field(mut self, field: FieldTags) -> Self {
        self.fields.push(field);
        self
    }

    /// The struct name, used as the first half of error labels.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field descriptions, in declaration order.
    pub fn fields(&self) -> &[FieldTags] {
        &self.fields
    }
}

/// Parse every field tag carried under `tag_key`, keyed by field name.
///
/// Fields with no tag string under the key (or an empty one) are skipped
/// entirely rather than entered as empty results. The first field that fails
/// to parse aborts the whole call; its error is labeled
/// `"StructName.FieldName"`.
pub fn parse_struct(
    schema: &StructSchema,
    tag_key: &str,
) -> Result<HashMap<String, Vec<Definition>>> {
    let mut result = HashMap::new();
    for field in schema.fields() {
        let tag = match field.get(tag_key) {
            Some(tag) if !tag.is_empty() => tag,
            _ => continue,
        };
        let label = format!("{}.{}", schema.name(), field.name());
        let definitions = parser::parse(tag, &label)?;
        result.insert(field.name().to_string(), definitions);
    }
    Ok(result)
}
