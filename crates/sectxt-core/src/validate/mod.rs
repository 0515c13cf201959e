//! Schema validator.
//!
//! Turns the loose `PolicyConfig` tree into a typed `Policy`, or fails on the
//! first violation with the offending key path. Check order:
//! root mapping, unknown keys, required keys, alias exclusion, directive
//! values in emission order, document comments.
//!
//! No warnings are emitted here; deprecated keys are reported by the renderer.

mod rules;

use std::collections::BTreeMap;

use crate::date::is_date_line;
use crate::directive::{
    is_known_key, slots, Cardinality, Profile, Slot, ValueRule, DIRECTIVES, POSTFIX_COMMENT_KEY,
    PREFIX_COMMENT_KEY,
};
use crate::error::{Result, SecTxtError};
use crate::field::{Annotated, AnnotatedValue, Comment, Field, FieldValue, Item, Policy, Scalar};
use crate::value::{ConfigValue, PolicyConfig};

use rules::{
    is_array_of, is_comment, is_one_of, is_required, is_single_line, is_string, is_uri,
    mutually_exclusive,
};

/// Validate under the default profile (only `contact` required).
pub fn validate(config: &PolicyConfig) -> Result<()> {
    validate_with(config, Profile::Default)
}

pub fn validate_with(config: &PolicyConfig, profile: Profile) -> Result<()> {
    check(config, profile).map(|_| ())
}

/// Validate and return the typed policy.
pub fn check(config: &PolicyConfig, profile: Profile) -> Result<Policy> {
    let map = match config.root() {
        ConfigValue::Object(map) => map,
        other => {
            return Err(SecTxtError::invalid(
                "policy",
                format!("expected a mapping of directives, found {}", other.kind()),
            ))
        }
    };

    if let Some(key) = map.keys().find(|k| !is_known_key(k)) {
        return Err(SecTxtError::invalid(key.as_str(), "unknown directive"));
    }

    for d in DIRECTIVES.iter().filter(|d| d.requirement.applies(profile)) {
        is_required(map, d.key)?;
    }

    for d in DIRECTIVES {
        if let Some(alias) = d.deprecated {
            mutually_exclusive(map, d.key, alias.key)?;
        }
    }

    let mut fields = Vec::new();
    for slot in slots() {
        if let Some(v) = map.get(slot.key) {
            fields.push(Field {
                slot,
                value: field_value(slot, v)?,
            });
        }
    }

    Ok(Policy {
        prefix: document_comment(map, PREFIX_COMMENT_KEY)?,
        fields,
        postfix: document_comment(map, POSTFIX_COMMENT_KEY)?,
    })
}

fn document_comment(
    map: &BTreeMap<String, ConfigValue>,
    key: &str,
) -> Result<Option<Comment>> {
    map.get(key).map(|v| is_comment(key, v)).transpose()
}

fn field_value(slot: Slot, v: &ConfigValue) -> Result<FieldValue> {
    let path = slot.key;
    match v {
        ConfigValue::Array(items) => {
            single_rejects_array(slot, path)?;
            let items = is_array_of(path, items, |p, item| match item {
                ConfigValue::Array(_) => Err(SecTxtError::invalid(p, "nested arrays are not allowed")),
                ConfigValue::Object(obj) => annotated(slot, p, obj).map(Item::Annotated),
                other => scalar(slot, p, other).map(Item::Scalar),
            })?;
            Ok(FieldValue::List(items))
        }
        ConfigValue::Object(obj) => annotated(slot, path, obj).map(FieldValue::Annotated),
        other => scalar(slot, path, other).map(FieldValue::Scalar),
    }
}

fn single_rejects_array(slot: Slot, path: &str) -> Result<()> {
    if slot.directive.cardinality == Cardinality::Single {
        return Err(SecTxtError::invalid(
            path,
            format!("{} takes a single value, arrays are not allowed", slot.directive.name),
        ));
    }
    Ok(())
}

fn annotated(slot: Slot, path: &str, obj: &BTreeMap<String, ConfigValue>) -> Result<Annotated> {
    if let Some(k) = obj.keys().find(|k| *k != "comment" && *k != "value") {
        return Err(SecTxtError::invalid(
            format!("{path}.{k}"),
            "annotated values only take `comment` and `value`",
        ));
    }

    let comment = obj
        .get("comment")
        .map(|c| is_comment(&format!("{path}.comment"), c))
        .transpose()?;

    let value_path = format!("{path}.value");
    let value = match obj.get("value") {
        None | Some(ConfigValue::Null) => {
            return Err(SecTxtError::invalid(value_path, "annotated value requires a `value`"))
        }
        Some(ConfigValue::Array(items)) => {
            single_rejects_array(slot, &value_path)?;
            let values = is_array_of(&value_path, items, |p, item| match item {
                ConfigValue::Array(_) => Err(SecTxtError::invalid(p, "nested arrays are not allowed")),
                ConfigValue::Object(_) => Err(SecTxtError::invalid(
                    p,
                    "annotated values cannot contain annotated values",
                )),
                other => scalar(slot, p, other),
            })?;
            AnnotatedValue::Many(values)
        }
        Some(ConfigValue::Object(_)) => {
            return Err(SecTxtError::invalid(
                value_path,
                "annotated values cannot contain annotated values",
            ))
        }
        Some(other) => AnnotatedValue::One(scalar(slot, &value_path, other)?),
    };

    Ok(Annotated { comment, value })
}

fn scalar(slot: Slot, path: &str, v: &ConfigValue) -> Result<Scalar> {
    let rule = slot.directive.rule;
    if let (ValueRule::Timestamp, ConfigValue::Date(t)) = (rule, v) {
        return Ok(Scalar::Date(*t));
    }

    let s = is_string(path, v)?;
    is_single_line(path, s)?;
    if slot.directive.cardinality == Cardinality::Joined && s.trim().is_empty() {
        return Err(SecTxtError::invalid(path, "must not be blank"));
    }
    match rule {
        ValueRule::Text => {}
        ValueRule::Uri => is_uri(path, s)?,
        ValueRule::Token(allowed) => is_one_of(path, s, allowed)?,
        ValueRule::Timestamp => {
            if !is_date_line(s)? {
                return Err(SecTxtError::invalid(
                    path,
                    "expected a date like `Fri, 2 Jan 1970 13:14:15 +0000` or a calendar-time value",
                ));
            }
        }
    }
    Ok(Scalar::Text(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg(v: serde_json::Value) -> PolicyConfig {
        PolicyConfig::from(v)
    }

    fn err_key(v: serde_json::Value) -> Option<String> {
        validate(&cfg(v)).err().and_then(|e| e.key().map(str::to_string))
    }

    #[test]
    fn contact_only_is_valid() {
        assert!(validate(&cfg(json!({"contact": "a@example.com"}))).is_ok());
    }

    #[test]
    fn missing_contact_fails() {
        assert_eq!(err_key(json!({"encryption": "https://x"})).as_deref(), Some("contact"));
        assert_eq!(err_key(json!({"contact": null})).as_deref(), Some("contact"));
    }

    #[test]
    fn non_mapping_root_fails() {
        assert!(validate(&PolicyConfig::default()).is_err());
        assert!(validate(&cfg(json!(["contact"]))).is_err());
        assert!(validate(&cfg(json!("contact"))).is_err());
    }

    #[test]
    fn unknown_key_fails() {
        assert_eq!(
            err_key(json!({"contact": "a", "disclosure": "full"})).as_deref(),
            Some("disclosure")
        );
    }

    #[test]
    fn deprecated_and_canonical_are_exclusive() {
        let key = err_key(json!({
            "contact": "a",
            "acknowledgments": "https://x/thanks",
            "acknowledgement": "https://x/thanks",
        }));
        assert_eq!(key.as_deref(), Some("acknowledgement"));
        assert!(validate(&cfg(json!({"contact": "a", "acknowledgement": "thank you"}))).is_ok());
    }

    #[test]
    fn exclusion_wins_over_bad_values() {
        let key = err_key(json!({
            "contact": "a",
            "acknowledgments": 1,
            "acknowledgement": [],
        }));
        assert_eq!(key.as_deref(), Some("acknowledgement"));
    }

    #[test]
    fn encryption_scheme() {
        assert!(validate(&cfg(json!({"contact": "a", "encryption": "http://x"}))).is_err());
        assert!(validate(&cfg(json!({"contact": "a", "encryption": "https://x"}))).is_ok());
        assert!(validate(&cfg(json!({"contact": "a", "encryption": "dns:abc"}))).is_ok());
        assert_eq!(
            err_key(json!({"contact": "a", "encryption": ["https://x", "HTTP://y"]})).as_deref(),
            Some("encryption[1]")
        );
    }

    #[test]
    fn single_directives_reject_arrays() {
        for key in ["canonical", "permission", "signature", "expires"] {
            let c = PolicyConfig::new().with("contact", "a").with(key, vec!["x"]);
            let got = validate(&c).err().and_then(|e| e.key().map(str::to_string));
            assert_eq!(got.as_deref(), Some(key), "key={key}");
        }
        let v = json!({"contact": "a", "canonical": {"comment": "c", "value": ["https://x"]}});
        assert_eq!(err_key(v).as_deref(), Some("canonical.value"));
    }

    #[test]
    fn permission_is_none_token() {
        assert!(validate(&cfg(json!({"contact": "a", "permission": "None"}))).is_ok());
        assert!(validate(&cfg(json!({"contact": "a", "permission": "some"}))).is_err());
    }

    #[test]
    fn expires_string_must_be_date_line() {
        let ok = json!({"contact": "a", "expires": "Fri, 2 Jan 1970 13:14:15 +0000"});
        assert!(validate(&cfg(ok)).is_ok());
        let bad = json!({"contact": "a", "expires": "tomorrow"});
        assert_eq!(err_key(bad).as_deref(), Some("expires"));
    }

    #[test]
    fn annotated_requires_value() {
        let v = json!({"contact": {"comment": "only a comment"}});
        assert_eq!(err_key(v).as_deref(), Some("contact.value"));
        let v = json!({"contact": ["a", {"comment": "c", "value": ""}]});
        assert_eq!(err_key(v).as_deref(), Some("contact[1].value"));
    }

    #[test]
    fn annotated_rejects_extra_keys_and_bad_comment() {
        let v = json!({"contact": {"value": "a", "note": "x"}});
        assert_eq!(err_key(v).as_deref(), Some("contact.note"));
        let v = json!({"contact": {"value": "a", "comment": 5}});
        assert_eq!(err_key(v).as_deref(), Some("contact.comment"));
    }

    #[test]
    fn nested_arrays_rejected() {
        let v = json!({"contact": [["a"]]});
        assert_eq!(err_key(v).as_deref(), Some("contact[0]"));
        let v = json!({"contact": {"value": [["a"]]}});
        assert_eq!(err_key(v).as_deref(), Some("contact.value[0]"));
        let v = json!({"contact": {"value": [{"value": "a"}]}});
        assert_eq!(err_key(v).as_deref(), Some("contact.value[0]"));
    }

    #[test]
    fn directive_values_are_single_line() {
        let v = json!({"contact": "a@example.com\nEncryption: http://evil"});
        assert_eq!(err_key(v).as_deref(), Some("contact"));
        let v = json!({"contact": ["a", {"comment": "multi\nline is fine", "value": "b\rc"}]});
        assert_eq!(err_key(v).as_deref(), Some("contact[1].value"));
        let ok = json!({"contact": {"comment": "one\ntwo", "value": "a"}});
        assert!(validate(&cfg(ok)).is_ok());
    }

    #[test]
    fn blank_language_rejected() {
        let v = json!({"contact": "c", "preferredLanguages": ["  ", "en"]});
        assert_eq!(err_key(v).as_deref(), Some("preferredLanguages[0]"));
        let v = json!({"contact": "c", "preferredLanguages": {"value": ["en", "\t"]}});
        assert_eq!(err_key(v).as_deref(), Some("preferredLanguages.value[1]"));
    }

    #[test]
    fn document_comments_are_strings() {
        let ok = json!({"contact": "a", "_prefixComment": ["x", "y"], "_postfixComment": "z"});
        assert!(validate(&cfg(ok)).is_ok());
        let bad = json!({"contact": "a", "_postfixComment": {"value": "z"}});
        assert_eq!(err_key(bad).as_deref(), Some("_postfixComment"));
    }

    #[test]
    fn rfc9116_profile_requires_expires() {
        let c = cfg(json!({"contact": "a"}));
        assert!(validate_with(&c, Profile::Rfc9116).is_err());
        let c = cfg(json!({"contact": "a", "expires": "Fri, 2 Jan 1970 13:14:15 +0000"}));
        assert!(validate_with(&c, Profile::Rfc9116).is_ok());
    }

    #[test]
    fn check_orders_fields_by_table() {
        let policy = check(
            &cfg(json!({"hiring": "h", "contact": "c", "encryption": "https://e"})),
            Profile::Default,
        );
        let keys: Vec<&str> = policy
            .map(|p| p.fields.iter().map(|f| f.slot.key).collect())
            .unwrap_or_default();
        assert_eq!(keys, ["contact", "encryption", "hiring"]);
    }
}
