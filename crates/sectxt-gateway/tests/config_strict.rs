#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sectxt_core::Profile;
use sectxt_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
  listne: "0.0.0.0:9090" # typo should fail
policy:
  contact: mailto:security@example.com
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
policy:
  contact: mailto:security@example.com
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.profile, Profile::Default);
}

#[test]
fn missing_policy_fails() {
    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert_eq!(err.key(), Some("policy"));
}

#[test]
fn policy_errors_come_from_core_validator() {
    let bad = r#"
version: 1
policy:
  contact: mailto:security@example.com
  encryption: http://example.com/key.txt
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.key(), Some("encryption"));
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
policy:
  contact: mailto:security@example.com
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.key(), Some("version"));
}

#[test]
fn bad_listen_address() {
    let bad = r#"
version: 1
gateway:
  listen: "localhost"
policy:
  contact: mailto:security@example.com
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.key(), Some("gateway.listen"));
}

#[test]
fn rfc9116_profile_requires_expires() {
    let bad = r#"
version: 1
profile: rfc9116
policy:
  contact: mailto:security@example.com
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.key(), Some("expires"));
}

#[test]
fn yaml_shapes_reach_the_validator() {
    let ok = r#"
version: 1
policy:
  _prefixComment: |-
    Security contacts
    for example.com
  contact:
    - comment: primary
      value: mailto:security@example.com
    - tel:+1-201-555-0123
  preferredLanguages: [en, nl]
  expires: "Thu, 31 Dec 2099 23:59:59 +0000"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(sectxt_core::validate(&cfg.policy).is_ok());
}
