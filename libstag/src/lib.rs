//! Parser for the definition mini-language carried in struct-field tag
//! strings.
//!
//! Tag strings like these:
//!
//! - `required,length(min=1, max=10)`
//! - `max=10,list=[apple, 'star fruits']`
//!
//! are comma-separated lists of *definitions*. A definition has one of three
//! forms:
//!
//! - a bare name: `required`
//! - a name with a single attribute: `max=10` (parsed as name `"max"` with
//!   attributes `{"max": 10}`)
//! - a name with an argument list: `length(min=1, max=10)`
//!
//! Names and attribute names are identifiers. An attribute value is a signed
//! 64-bit integer, a 64-bit float, a string quoted by `'`, a bare identifier
//! (interpreted as a string), or an array:
//!
//! - integer: `123`, `-56`
//! - float: `111.12`
//! - string: `'ab\tc'`
//! - identifier: `aaa`
//! - array: `[1, 2, aaa]`
//!
//! # Parsing Pipeline
//!
//! 1. **Scanner**: lexes the raw string into identifier, number, and
//!    punctuation tokens, tracking line/column for diagnostics.
//! 2. **Parser**: recursive descent over the token stream, producing
//!    [`Definition`] records with typed [`Value`] attributes.
//!
//! Each call owns its own scanner and parser state, so parsing is safe to
//! invoke concurrently from multiple callers.
//!
//! # Example
//!
//! ```
//! use libstag::{parse_tag, Value};
//!
//! let defs = parse_tag("required,length(min=4, max=10)", "User.Name").unwrap();
//! assert_eq!(defs.len(), 2);
//! assert_eq!(defs[0].name(), "required");
//! assert_eq!(defs[1].attribute("min"), Some(&Value::Int(4)));
//! ```

mod definition;
mod encode;
mod error;
mod parser;
mod scanner;
mod schema;
mod value;

pub use definition::Definition;
pub use encode::{encode_definition, encode_definitions, encode_value};
pub use error::{ErrorKind, ParseError, Result};
pub use schema::{parse_struct, FieldTags, StructSchema};
pub use value::Value;

/// Parse one tag string into its definitions, in source order.
///
/// `source` is an opaque caller-supplied label (conventionally
/// `"Type.Field"`) embedded verbatim into any resulting error.
pub fn parse_tag(tag: &str, source: &str) -> Result<Vec<Definition>> {
    parser::parse(tag, source)
}
