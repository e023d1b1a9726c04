//! Runtime schema model for AI response validation.
//!
//! Model responses arrive as untyped JSON. Each analysis payload has a
//! [`Schema`] describing its required shape; [`validate`] narrows a raw
//! payload to that shape or reports every constraint violation with its
//! field path. Schemas are process-wide constants built once in
//! [`registry`] and shared by reference across all calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

pub mod registry;
mod validate;

pub use validate::validate;

/// Declarative description of a JSON value's required shape.
#[derive(Debug, Clone)]
pub enum Schema {
    Bool,
    Integer,
    Number,
    String,
    /// A string restricted to a fixed set of values.
    Enum(Vec<String>),
    Array(Box<Schema>),
    /// A string-keyed map with arbitrary keys; all values share one schema.
    Map(Box<Schema>),
    Object(ObjectSchema),
}

impl Schema {
    pub fn enumeration<I>(values: I) -> Schema
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Schema::Enum(values.into_iter().map(Into::into).collect())
    }

    pub fn array(items: Schema) -> Schema {
        Schema::Array(Box::new(items))
    }

    pub fn map(values: Schema) -> Schema {
        Schema::Map(Box::new(values))
    }

    /// An object that tolerates unknown fields (they are dropped during
    /// narrowing).
    pub fn object(fields: Vec<FieldSchema>) -> Schema {
        Schema::Object(ObjectSchema {
            fields,
            deny_unknown: false,
        })
    }

    /// An object that rejects unknown fields.
    pub fn closed_object(fields: Vec<FieldSchema>) -> Schema {
        Schema::Object(ObjectSchema {
            fields,
            deny_unknown: true,
        })
    }

    /// One-line shape description used in violation messages.
    fn describe(&self) -> String {
        match self {
            Schema::Bool => "a boolean".to_string(),
            Schema::Integer => "an integer".to_string(),
            Schema::Number => "a number".to_string(),
            Schema::String => "a string".to_string(),
            Schema::Enum(allowed) => format!("one of [{}]", allowed.join(", ")),
            Schema::Array(_) => "an array".to_string(),
            Schema::Map(_) | Schema::Object(_) => "an object".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectSchema {
    /// Declared fields, in the order violations are reported.
    pub fields: Vec<FieldSchema>,
    /// Reject fields not named in `fields` instead of ignoring them.
    pub deny_unknown: bool,
}

#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: String,
    pub schema: Schema,
    pub required: bool,
    /// Substituted into the narrowed output when an optional field is absent.
    pub default: Option<Value>,
}

impl FieldSchema {
    pub fn required(name: &str, schema: Schema) -> Self {
        FieldSchema {
            name: name.to_string(),
            schema,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &str, schema: Schema) -> Self {
        FieldSchema {
            name: name.to_string(),
            schema,
            required: false,
            default: None,
        }
    }

    pub fn optional_with_default(name: &str, schema: Schema, default: Value) -> Self {
        FieldSchema {
            name: name.to_string(),
            schema,
            required: false,
            default: Some(default),
        }
    }
}

/// A single constraint violation found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Violation {
    /// Field path of the offending value, e.g. `$.coverage_gaps[2].severity`.
    pub path: String,
    /// Description of the expected shape.
    pub expected: String,
    /// Compact rendering of the actual value.
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, got {}", self.path, self.expected, self.actual)
    }
}
