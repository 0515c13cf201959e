//! Typed field values, produced by the validator from the loose tree.

use chrono::{DateTime, Utc};

use crate::directive::Slot;

/// Atomic directive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Date(DateTime<Utc>),
}

/// Comment attached to the document or to one value occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Comment {
    Line(String),
    Lines(Vec<String>),
}

impl Comment {
    /// Output lines, each element split on `\n`, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let parts: &[String] = match self {
            Comment::Line(s) => std::slice::from_ref(s),
            Comment::Lines(v) => v.as_slice(),
        };
        parts
            .iter()
            .flat_map(|p| p.split('\n'))
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

/// Value carried by an annotated object.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

/// `{comment, value}` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated {
    pub comment: Option<Comment>,
    pub value: AnnotatedValue,
}

/// Element of a top-level array.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Scalar(Scalar),
    Annotated(Annotated),
}

/// Every accepted shape of a directive's value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    Annotated(Annotated),
    List(Vec<Item>),
}

/// A present directive key with its validated value.
#[derive(Debug, Clone)]
pub struct Field {
    pub slot: Slot,
    pub value: FieldValue,
}

/// Validated policy, fields in emission order.
#[derive(Debug, Clone)]
pub struct Policy {
    pub prefix: Option<Comment>,
    pub fields: Vec<Field>,
    pub postfix: Option<Comment>,
}
