//! Directive table.
//!
//! One static table drives both validation and rendering: output order,
//! deprecated aliases, cardinality and value rules all live here.

use serde::Deserialize;

/// Reserved key for comment lines emitted before every directive.
pub const PREFIX_COMMENT_KEY: &str = "_prefixComment";
/// Reserved key for comment lines emitted after every directive.
pub const POSTFIX_COMMENT_KEY: &str = "_postfixComment";

/// How many output lines a directive may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// One line per value; arrays allowed.
    Repeatable,
    /// Exactly one value; arrays rejected (even of length 1).
    Single,
    /// Any number of values collapsed into one comma-joined line.
    Joined,
}

/// Constraint applied to every scalar of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Non-empty string.
    Text,
    /// URI; plain `http://` is refused (case-insensitive).
    Uri,
    /// Date-line string or calendar-time value.
    Timestamp,
    /// Case-insensitive token from a fixed set.
    Token(&'static [&'static str]),
}

/// When a directive must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Always,
    /// Mandatory only under the RFC 9116 profile.
    Rfc9116,
}

/// Which mandatory-field set validation enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Only `contact` is required.
    #[default]
    Default,
    /// `contact` and `expires` are required.
    Rfc9116,
}

impl Requirement {
    pub fn applies(self, profile: Profile) -> bool {
        match self {
            Requirement::Optional => false,
            Requirement::Always => true,
            Requirement::Rfc9116 => profile == Profile::Rfc9116,
        }
    }
}

/// Older spelling of a directive.
#[derive(Debug, Clone, Copy)]
pub struct Alias {
    pub key: &'static str,
    pub name: &'static str,
}

#[derive(Debug)]
pub struct Directive {
    /// camelCase configuration key.
    pub key: &'static str,
    /// Name written to the document.
    pub name: &'static str,
    pub deprecated: Option<Alias>,
    pub cardinality: Cardinality,
    pub rule: ValueRule,
    pub requirement: Requirement,
}

const fn directive(
    key: &'static str,
    name: &'static str,
    cardinality: Cardinality,
    rule: ValueRule,
) -> Directive {
    Directive {
        key,
        name,
        deprecated: None,
        cardinality,
        rule,
        requirement: Requirement::Optional,
    }
}

/// All directives in output order.
pub static DIRECTIVES: &[Directive] = &[
    Directive {
        requirement: Requirement::Always,
        ..directive("contact", "Contact", Cardinality::Repeatable, ValueRule::Text)
    },
    directive("encryption", "Encryption", Cardinality::Repeatable, ValueRule::Uri),
    directive("canonical", "Canonical", Cardinality::Single, ValueRule::Uri),
    Directive {
        deprecated: Some(Alias {
            key: "acknowledgement",
            name: "Acknowledgement",
        }),
        ..directive(
            "acknowledgments",
            "Acknowledgments",
            Cardinality::Repeatable,
            ValueRule::Text,
        )
    },
    directive(
        "preferredLanguages",
        "Preferred-Languages",
        Cardinality::Joined,
        ValueRule::Text,
    ),
    directive("policy", "Policy", Cardinality::Repeatable, ValueRule::Text),
    directive("hiring", "Hiring", Cardinality::Repeatable, ValueRule::Text),
    directive(
        "permission",
        "Permission",
        Cardinality::Single,
        ValueRule::Token(&["none"]),
    ),
    directive("signature", "Signature", Cardinality::Single, ValueRule::Text),
    Directive {
        requirement: Requirement::Rfc9116,
        ..directive("expires", "Expires", Cardinality::Single, ValueRule::Timestamp)
    },
];

/// One config key in emission order: canonical keys, each followed by its alias.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub key: &'static str,
    pub directive: &'static Directive,
    pub deprecated: bool,
}

/// Emission order over every accepted directive key.
pub fn slots() -> impl Iterator<Item = Slot> {
    DIRECTIVES.iter().flat_map(|d| {
        let canonical = Slot {
            key: d.key,
            directive: d,
            deprecated: false,
        };
        let alias = d.deprecated.map(|a| Slot {
            key: a.key,
            directive: d,
            deprecated: true,
        });
        std::iter::once(canonical).chain(alias)
    })
}

/// Resolve a config key (canonical or deprecated).
pub fn lookup(key: &str) -> Option<Slot> {
    slots().find(|s| s.key == key)
}

/// Whether `key` is accepted at the configuration root.
pub fn is_known_key(key: &str) -> bool {
    key == PREFIX_COMMENT_KEY || key == POSTFIX_COMMENT_KEY || lookup(key).is_some()
}
