//! Field-value normalizer.
//!
//! Collapses every accepted shape into one ordered sequence of
//! `(comment, scalar)` occurrences. No sorting, dedup or merging.

use crate::field::{Annotated, AnnotatedValue, Comment, FieldValue, Item, Scalar};

/// One output occurrence of a directive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence<'a> {
    pub comment: Option<&'a Comment>,
    pub scalar: &'a Scalar,
}

pub fn normalize(value: &FieldValue) -> Vec<Occurrence<'_>> {
    let mut out = Vec::new();
    match value {
        FieldValue::Scalar(s) => out.push(Occurrence {
            comment: None,
            scalar: s,
        }),
        FieldValue::Annotated(a) => push_annotated(&mut out, a),
        FieldValue::List(items) => {
            for item in items {
                match item {
                    Item::Scalar(s) => out.push(Occurrence {
                        comment: None,
                        scalar: s,
                    }),
                    Item::Annotated(a) => push_annotated(&mut out, a),
                }
            }
        }
    }
    out
}

// A grouped value shares one comment: it goes on the first occurrence only.
fn push_annotated<'a>(out: &mut Vec<Occurrence<'a>>, a: &'a Annotated) {
    match &a.value {
        AnnotatedValue::One(s) => out.push(Occurrence {
            comment: a.comment.as_ref(),
            scalar: s,
        }),
        AnnotatedValue::Many(values) => {
            for (i, s) in values.iter().enumerate() {
                out.push(Occurrence {
                    comment: if i == 0 { a.comment.as_ref() } else { None },
                    scalar: s,
                });
            }
        }
    }
}
