//! Structural meta-schema check run before conversion
//!
//! The converter assumes well-formed keyword values; this walk rejects
//! documents that violate the meta-schema up front, pointing at the
//! offending location. Definition entries that are neither subschemas nor
//! nested namespaces are left for the converter to report, since telling
//! the two apart needs conversion context.

use serde_json::Value;

use schemaowl_core::prelude::*;
use schemaowl_core::schema::{keywords, PRIMITIVE_TYPES};

/// Check a document against the meta-schema
///
/// # Errors
///
/// Returns [`SchemaOwlError::MetaValidation`] naming the first offending
/// location when the document is not a valid schema.
pub fn check_schema(schema: &Value) -> Result<()> {
    check_subschema(schema, "")
}

fn check_subschema(schema: &Value, location: &str) -> Result<()> {
    let map = match schema {
        Value::Bool(_) => return Ok(()),
        Value::Object(map) => map,
        _ => {
            return Err(SchemaOwlError::meta_validation_at(
                "a schema must be a boolean or a mapping",
                location,
            ));
        }
    };
    for (keyword, value) in map {
        let at = format!("{location}/{keyword}");
        match keyword.as_str() {
            keywords::TYPE => check_type(value, &at)?,
            keywords::ID | keywords::REF | keywords::FORMAT | "pattern" => {
                check_string(value, &at)?;
            }
            "maximum" | "exclusiveMaximum" | "minimum" | "exclusiveMinimum" => {
                check_number(value, &at)?;
            }
            "maxLength" | "minLength" => check_length(value, &at)?,
            keywords::ENUM => check_enum(value, &at)?,
            keywords::ALL_OF | keywords::ANY_OF | keywords::ONE_OF => {
                check_branches(value, &at)?;
            }
            keywords::NOT => check_subschema(value, &at)?,
            keywords::PROPERTIES => check_properties(value, &at)?,
            keywords::REQUIRED => check_required(value, &at)?,
            keywords::DEFINITIONS => check_definitions(value, &at)?,
            _ => {}
        }
    }
    Ok(())
}

fn check_type(value: &Value, location: &str) -> Result<()> {
    let names: Vec<&Value> = match value {
        Value::String(_) => vec![value],
        Value::Array(items) if !items.is_empty() => items.iter().collect(),
        _ => {
            return Err(SchemaOwlError::meta_validation_at(
                "'type' must be a primitive type name or a non-empty list of them",
                location,
            ));
        }
    };
    for name in names {
        match name.as_str() {
            Some(name) if PRIMITIVE_TYPES.contains(&name) => {}
            _ => {
                return Err(SchemaOwlError::meta_validation_at(
                    format!("'{name}' is not a primitive type name"),
                    location,
                ));
            }
        }
    }
    Ok(())
}

fn check_string(value: &Value, location: &str) -> Result<()> {
    if value.is_string() {
        Ok(())
    } else {
        Err(SchemaOwlError::meta_validation_at(
            "expected a string",
            location,
        ))
    }
}

fn check_number(value: &Value, location: &str) -> Result<()> {
    if value.is_number() {
        Ok(())
    } else {
        Err(SchemaOwlError::meta_validation_at(
            "expected a number",
            location,
        ))
    }
}

fn check_length(value: &Value, location: &str) -> Result<()> {
    match value.as_f64() {
        Some(length) if length >= 0.0 => Ok(()),
        _ => Err(SchemaOwlError::meta_validation_at(
            "expected a non-negative number",
            location,
        )),
    }
}

fn check_enum(value: &Value, location: &str) -> Result<()> {
    match value.as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(SchemaOwlError::meta_validation_at(
            "'enum' must be a non-empty list of values",
            location,
        )),
    }
}

fn check_branches(value: &Value, location: &str) -> Result<()> {
    let Some(branches) = value.as_array() else {
        return Err(SchemaOwlError::meta_validation_at(
            "expected a list of subschemas",
            location,
        ));
    };
    if branches.is_empty() {
        return Err(SchemaOwlError::meta_validation_at(
            "expected at least one subschema",
            location,
        ));
    }
    for (index, branch) in branches.iter().enumerate() {
        check_subschema(branch, &format!("{location}/{index}"))?;
    }
    Ok(())
}

fn check_properties(value: &Value, location: &str) -> Result<()> {
    let Some(properties) = value.as_object() else {
        return Err(SchemaOwlError::meta_validation_at(
            "'properties' must be a mapping of names to subschemas",
            location,
        ));
    };
    for (name, property) in properties {
        check_subschema(property, &format!("{location}/{name}"))?;
    }
    Ok(())
}

fn check_required(value: &Value, location: &str) -> Result<()> {
    match value.as_array() {
        Some(names) if names.iter().all(Value::is_string) => Ok(()),
        _ => Err(SchemaOwlError::meta_validation_at(
            "'required' must be a list of property names",
            location,
        )),
    }
}

fn check_definitions(value: &Value, location: &str) -> Result<()> {
    let Some(definitions) = value.as_object() else {
        return Err(SchemaOwlError::meta_validation_at(
            "'definitions' must be a mapping",
            location,
        ));
    };
    for (name, definition) in definitions {
        // A mapping value may be a subschema or a namespace of further
        // definitions; both are structurally checked the same way here.
        if definition.is_object() || definition.is_boolean() {
            check_subschema(definition, &format!("{location}/{name}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location_of(error: &SchemaOwlError) -> String {
        match error {
            SchemaOwlError::MetaValidation { location, .. } => {
                location.clone().unwrap_or_default()
            }
            other => panic!("expected a meta-validation error, got {other}"),
        }
    }

    #[test]
    fn test_booleans_and_mappings_pass() {
        assert!(check_schema(&json!(true)).is_ok());
        assert!(check_schema(&json!(false)).is_ok());
        assert!(check_schema(&json!({})).is_ok());
    }

    #[test]
    fn test_non_schema_root_fails() {
        let err = check_schema(&json!(3)).expect_err("not a schema");
        assert_eq!(location_of(&err), "");
    }

    #[test]
    fn test_unknown_type_name_fails() {
        let err = check_schema(&json!({"type": "quux"})).expect_err("bad type");
        assert_eq!(location_of(&err), "/type");
    }

    #[test]
    fn test_nested_violations_are_located() {
        let schema = json!({
            "properties": {
                "x": {"type": "number", "maximum": "high"}
            }
        });
        let err = check_schema(&schema).expect_err("bad maximum");
        assert_eq!(location_of(&err), "/properties/x/maximum");
    }

    #[test]
    fn test_branches_are_checked() {
        let schema = json!({"oneOf": [{"type": "string"}, 3]});
        let err = check_schema(&schema).expect_err("bad branch");
        assert_eq!(location_of(&err), "/oneOf/1");
    }

    #[test]
    fn test_empty_branch_list_fails() {
        let schema = json!({"anyOf": []});
        let err = check_schema(&schema).expect_err("empty branch list");
        assert_eq!(location_of(&err), "/anyOf");
    }

    #[test]
    fn test_non_schema_definition_entries_are_tolerated() {
        let schema = json!({"definitions": {"title": "Shapes", "n": 7}});
        assert!(check_schema(&schema).is_ok());
    }

    #[test]
    fn test_required_must_hold_names() {
        let schema = json!({"type": "object", "required": [1]});
        let err = check_schema(&schema).expect_err("bad required");
        assert_eq!(location_of(&err), "/required");
    }
}
