//! Validation combinators.
//!
//! Each rule takes the path of the value it checks so the error can point at
//! the exact element (`contact[2].value`).

use std::collections::BTreeMap;

use crate::error::{Result, SecTxtError};
use crate::field::Comment;
use crate::value::ConfigValue;

/// Non-empty string.
pub(crate) fn is_string<'a>(path: &str, v: &'a ConfigValue) -> Result<&'a str> {
    match v {
        ConfigValue::String(s) if s.is_empty() => {
            Err(SecTxtError::invalid(path, "must not be an empty string"))
        }
        ConfigValue::String(s) => Ok(s),
        other => Err(SecTxtError::invalid(
            path,
            format!("expected a string, found {}", other.kind()),
        )),
    }
}

/// No line breaks; each value is written as exactly one output line.
pub(crate) fn is_single_line(path: &str, s: &str) -> Result<()> {
    if s.contains(['\r', '\n']) {
        return Err(SecTxtError::invalid(path, "must be a single line"));
    }
    Ok(())
}

/// Case-insensitive match against a fixed token set.
pub(crate) fn is_one_of(path: &str, s: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(s)) {
        return Ok(());
    }
    Err(SecTxtError::invalid(
        path,
        format!("`{s}` is not one of: {}", allowed.join(", ")),
    ))
}

/// URI that does not use plain HTTP.
pub(crate) fn is_uri(path: &str, s: &str) -> Result<()> {
    let insecure = s
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http://"));
    if insecure {
        return Err(SecTxtError::invalid(
            path,
            "http:// is not allowed, use https:// or another scheme",
        ));
    }
    Ok(())
}

/// Non-empty array whose elements all pass `f`; element paths are `path[i]`.
pub(crate) fn is_array_of<'a, T>(
    path: &str,
    items: &'a [ConfigValue],
    mut f: impl FnMut(&str, &'a ConfigValue) -> Result<T>,
) -> Result<Vec<T>> {
    if items.is_empty() {
        return Err(SecTxtError::invalid(path, "must not be an empty array"));
    }
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        out.push(f(&format!("{path}[{i}]"), item)?);
    }
    Ok(out)
}

/// Present and not null.
pub(crate) fn is_required<'a>(
    map: &'a BTreeMap<String, ConfigValue>,
    key: &str,
) -> Result<&'a ConfigValue> {
    match map.get(key) {
        None | Some(ConfigValue::Null) => Err(SecTxtError::invalid(key, "is required")),
        Some(v) => Ok(v),
    }
}

/// At most one of `a` and `b` may be present.
pub(crate) fn mutually_exclusive(
    map: &BTreeMap<String, ConfigValue>,
    a: &str,
    b: &str,
) -> Result<()> {
    if map.contains_key(a) && map.contains_key(b) {
        return Err(SecTxtError::invalid(
            b,
            format!("cannot be combined with `{a}`"),
        ));
    }
    Ok(())
}

/// String or array of strings. Empty strings are allowed here (blank `#` lines).
pub(crate) fn is_comment(path: &str, v: &ConfigValue) -> Result<Comment> {
    match v {
        ConfigValue::String(s) => Ok(Comment::Line(s.clone())),
        ConfigValue::Array(items) => {
            let lines = is_array_of(path, items, |p, item| match item {
                ConfigValue::String(s) => Ok(s.clone()),
                other => Err(SecTxtError::invalid(
                    p,
                    format!("comment lines must be strings, found {}", other.kind()),
                )),
            })?;
            Ok(Comment::Lines(lines))
        }
        other => Err(SecTxtError::invalid(
            path,
            format!(
                "comment must be a string or an array of strings, found {}",
                other.kind()
            ),
        )),
    }
}
