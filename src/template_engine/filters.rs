//! Custom Tera filters for indentation, case conversion and identifiers.
//!
//! `replace` and `trim` come from Tera's built-ins and keep their literal,
//! non-regex semantics.

use std::collections::HashMap;

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase};
use tera::{Result, Tera, Value};

/// Register every custom filter on a Tera instance.
pub(crate) fn register(tera: &mut Tera) {
    tera.register_filter("nindent", nindent);
    tera.register_filter("indent", indent);
    tera.register_filter("normalize_identifier", normalize_identifier);
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("pascal_case", pascal_case);
    tera.register_filter("camel_case", camel_case);
    tera.register_filter("kebab_case", kebab_case);
    tera.register_filter("shouty_snake_case", shouty_snake_case);
}

/// Prefix every line of `s` with `width` spaces, blank lines included.
pub(crate) fn indent_lines(s: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(s.len() + pad.len());
    out.push_str(&pad);
    out.push_str(&s.replace('\n', &format!("\n{pad}")));
    out
}

pub(crate) fn indent(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("indent", value)?;
    let width = width_arg("indent", args)?;
    Ok(Value::String(indent_lines(s, width)))
}

/// `indent` with a newline in front, for starting a block on its own line.
pub(crate) fn nindent(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("nindent", value)?;
    let width = width_arg("nindent", args)?;
    Ok(Value::String(format!("\n{}", indent_lines(s, width))))
}

pub(crate) fn normalize_identifier(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("normalize_identifier", value)?;
    Ok(Value::String(crate::source::normalize_identifier(s)))
}

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("snake_case", value)?;
    Ok(Value::String(s.to_snake_case()))
}

pub(crate) fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("pascal_case", value)?;
    Ok(Value::String(s.to_pascal_case()))
}

pub(crate) fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("camel_case", value)?;
    Ok(Value::String(s.to_lower_camel_case()))
}

pub(crate) fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("kebab_case", value)?;
    Ok(Value::String(s.to_kebab_case()))
}

pub(crate) fn shouty_snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = string_arg("shouty_snake_case", value)?;
    Ok(Value::String(s.to_shouty_snake_case()))
}

fn string_arg<'a>(filter: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter expects a string")))
}

fn width_arg(filter: &str, args: &HashMap<String, Value>) -> Result<usize> {
    let n = args
        .get("n")
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter requires an `n` argument")))?;
    n.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            tera::Error::msg(format!(
                "{filter} filter expects `n` to be a non-negative integer, got {n}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(filter: fn(&Value, &HashMap<String, Value>) -> Result<Value>, input: &str) -> String {
        let val = Value::String(input.to_string());
        let args = HashMap::new();
        filter(&val, &args).unwrap().as_str().unwrap().to_string()
    }

    fn apply_width(
        filter: fn(&Value, &HashMap<String, Value>) -> Result<Value>,
        input: &str,
        n: u64,
    ) -> String {
        let val = Value::String(input.to_string());
        let mut args = HashMap::new();
        args.insert("n".to_string(), Value::from(n));
        filter(&val, &args).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_nindent_prefixes_every_line() {
        assert_eq!(apply_width(nindent, "a\n  b\nc", 2), "\n  a\n    b\n  c");
    }

    #[test]
    fn test_nindent_pads_blank_lines() {
        assert_eq!(apply_width(nindent, "\nx\n", 3), "\n   \n   x\n   ");
    }

    #[test]
    fn test_indent_has_no_leading_newline() {
        assert_eq!(apply_width(indent, "a\nb", 4), "    a\n    b");
        assert_eq!(apply_width(indent, "", 2), "  ");
    }

    #[test]
    fn test_nindent_then_trim_keeps_interior_indentation() {
        let body = apply_width(nindent, "\n\nThis\n  is\n    table\ndescription\n\n", 10);
        assert_eq!(
            body.trim(),
            "This\n            is\n              table\n          description"
        );
    }

    #[test]
    fn test_indent_requires_width() {
        let val = Value::String("x".to_string());
        let err = nindent(&val, &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("`n` argument"));

        let mut args = HashMap::new();
        args.insert("n".to_string(), Value::from(-1));
        assert!(indent(&val, &args).is_err());
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(apply(normalize_identifier, "my-gcp-project"), "my_gcp_project");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(apply(snake_case, "CreatedAt"), "created_at");
        assert_eq!(apply(snake_case, "my-dataset"), "my_dataset");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(apply(pascal_case, "my_table"), "MyTable");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(apply(camel_case, "my_table"), "myTable");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(apply(kebab_case, "MyTable"), "my-table");
    }

    #[test]
    fn test_shouty_snake_case() {
        assert_eq!(apply(shouty_snake_case, "my-table"), "MY_TABLE");
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let val = Value::Number(42.into());
        let args = HashMap::new();
        assert!(snake_case(&val, &args).is_err());
    }
}
