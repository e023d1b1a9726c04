use serde_json::{Map, Value};

use super::{ObjectSchema, Schema, Violation};

/// Validate `payload` against `schema`.
///
/// On success returns the narrowed value: exactly the schema-declared
/// structure, with defaults substituted for absent optional fields and
/// unknown fields dropped. Narrowing is idempotent: re-validating a
/// narrowed value yields the same value.
///
/// On failure returns every violation found, in field-path order (declared
/// field order, recursing depth-first), not just the first.
///
/// Pure function of `(schema, payload)`.
pub fn validate(schema: &Schema, payload: &Value) -> Result<Value, Vec<Violation>> {
    let mut violations = Vec::new();
    match check(schema, payload, "$", &mut violations) {
        Some(narrowed) if violations.is_empty() => Ok(narrowed),
        _ => Err(violations),
    }
}

fn check(schema: &Schema, value: &Value, path: &str, out: &mut Vec<Violation>) -> Option<Value> {
    match schema {
        Schema::Bool if value.is_boolean() => Some(value.clone()),
        Schema::Integer if value.as_i64().is_some() || value.as_u64().is_some() => {
            Some(value.clone())
        }
        Schema::Number if value.is_number() => Some(value.clone()),
        Schema::String if value.is_string() => Some(value.clone()),
        Schema::Enum(allowed) => match value.as_str() {
            Some(s) if allowed.iter().any(|a| a == s) => Some(value.clone()),
            _ => fail(out, path, schema, value),
        },
        Schema::Array(items) => {
            let Some(elements) = value.as_array() else {
                return fail(out, path, schema, value);
            };
            let before = out.len();
            let mut narrowed = Vec::with_capacity(elements.len());
            for (i, element) in elements.iter().enumerate() {
                if let Some(n) = check(items, element, &format!("{path}[{i}]"), out) {
                    narrowed.push(n);
                }
            }
            (out.len() == before).then_some(Value::Array(narrowed))
        }
        Schema::Map(values) => {
            let Some(entries) = value.as_object() else {
                return fail(out, path, schema, value);
            };
            let before = out.len();
            let mut narrowed = Map::new();
            for (key, entry) in entries {
                if let Some(n) = check(values, entry, &format!("{path}.{key}"), out) {
                    narrowed.insert(key.clone(), n);
                }
            }
            (out.len() == before).then_some(Value::Object(narrowed))
        }
        Schema::Object(object) => check_object(object, value, path, out),
        // Scalar guards above fell through: wrong type.
        Schema::Bool | Schema::Integer | Schema::Number | Schema::String => {
            fail(out, path, schema, value)
        }
    }
}

fn check_object(
    object: &ObjectSchema,
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<Value> {
    let Some(entries) = value.as_object() else {
        out.push(Violation {
            path: path.to_string(),
            expected: "an object".to_string(),
            actual: render(value),
        });
        return None;
    };

    let before = out.len();
    let mut narrowed = Map::new();

    for field in &object.fields {
        let field_path = format!("{path}.{}", field.name);
        match entries.get(&field.name) {
            Some(entry) => {
                if let Some(n) = check(&field.schema, entry, &field_path, out) {
                    narrowed.insert(field.name.clone(), n);
                }
            }
            None if field.required => out.push(Violation {
                path: field_path,
                expected: field.schema.describe(),
                actual: "nothing (field is absent)".to_string(),
            }),
            None => {
                if let Some(default) = &field.default {
                    narrowed.insert(field.name.clone(), default.clone());
                }
            }
        }
    }

    if object.deny_unknown {
        for (key, entry) in entries {
            if !object.fields.iter().any(|f| f.name == *key) {
                out.push(Violation {
                    path: format!("{path}.{key}"),
                    expected: "no such field".to_string(),
                    actual: render(entry),
                });
            }
        }
    }

    (out.len() == before).then_some(Value::Object(narrowed))
}

fn fail(out: &mut Vec<Violation>, path: &str, schema: &Schema, value: &Value) -> Option<Value> {
    out.push(Violation {
        path: path.to_string(),
        expected: schema.describe(),
        actual: render(value),
    });
    None
}

/// Compact rendering of the offending value for violation messages.
/// Long values are truncated so a violation stays one readable line.
fn render(value: &Value) -> String {
    const MAX: usize = 120;
    let text = value.to_string();
    if text.len() <= MAX {
        return text;
    }
    let mut end = MAX - 1;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &text[..end])
}
