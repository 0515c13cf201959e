//! Policy renderer.
//!
//! Output is line-oriented, every line `\n`-terminated:
//! ```text
//! # <prefix comment lines>
//! # <occurrence comment>
//! <Directive>: <value>
//! ...
//! # <postfix comment lines>
//! ```
//! Directives follow the table order in `directive.rs`. Deprecated keys are
//! written under their canonical name.

use std::borrow::Cow;
use std::fmt::Write;

use crate::date::format_rfc5322;
use crate::diag::{Diagnostic, DiagnosticsSink, TracingSink};
use crate::directive::{Cardinality, Profile};
use crate::error::Result;
use crate::field::{Comment, Field, Policy, Scalar};
use crate::normalize::normalize;
use crate::validate::check;
use crate::value::PolicyConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub profile: Profile,
}

/// Validate and render with the default profile, warnings to `tracing`.
pub fn render(config: &PolicyConfig) -> Result<String> {
    render_with(config, RenderOptions::default(), &TracingSink)
}

pub fn render_with(
    config: &PolicyConfig,
    options: RenderOptions,
    sink: &dyn DiagnosticsSink,
) -> Result<String> {
    let policy = check(config, options.profile)?;
    Ok(render_policy(&policy, sink))
}

/// Render an already validated policy.
pub fn render_policy(policy: &Policy, sink: &dyn DiagnosticsSink) -> String {
    let mut out = String::new();

    if let Some(c) = &policy.prefix {
        push_comment(&mut out, c);
    }

    for field in &policy.fields {
        if field.slot.deprecated {
            sink.emit(Diagnostic::DeprecatedKey {
                key: field.slot.key,
                replacement: field.slot.directive.key,
            });
        }
        push_field(&mut out, field);
    }

    if let Some(c) = &policy.postfix {
        push_comment(&mut out, c);
    }

    out
}

fn push_field(out: &mut String, field: &Field) {
    let name = field.slot.directive.name;
    let occurrences = normalize(&field.value);

    if field.slot.directive.cardinality == Cardinality::Joined {
        for c in occurrences.iter().filter_map(|o| o.comment) {
            push_comment(out, c);
        }
        let joined = occurrences
            .iter()
            .map(|o| scalar_text(o.scalar).trim().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{name}: {joined}");
        return;
    }

    for o in &occurrences {
        if let Some(c) = o.comment {
            push_comment(out, c);
        }
        let _ = writeln!(out, "{name}: {}", scalar_text(o.scalar));
    }
}

fn push_comment(out: &mut String, c: &Comment) {
    for line in c.lines() {
        let _ = writeln!(out, "# {line}");
    }
}

// Date-line strings were checked by the validator and pass through untouched.
fn scalar_text(s: &Scalar) -> Cow<'_, str> {
    match s {
        Scalar::Text(t) => Cow::Borrowed(t),
        Scalar::Date(t) => Cow::Owned(format_rfc5322(t)),
    }
}
