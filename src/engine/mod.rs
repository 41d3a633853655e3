//! # Substitution Engine
//!
//! A small rule interpreter: a template is transformed by an ordered list of
//! named [`Step`]s. Each step pairs a [`Guard`] (when does it apply) with an
//! [`Action`] (what it does to the text).
//!
//! ```text
//! template ──▶ step 1 ──▶ step 2 ──▶ ... ──▶ rendered snippet
//!              (guard?)   (guard?)
//! ```
//!
//! Order is significant. Later steps key off text introduced or removed by
//! earlier ones: the header declaration expands into text that contains the
//! `<headers-addition>` marker, and the credential rewrite in password mode
//! changes which marker the credential is filled into. The pipeline builder
//! in [`crate::pipeline`] owns the ordering; this module only executes it.
//!
//! User-supplied values enter through a single [`Action::Fill`] pass. Text
//! inserted by that pass is never scanned again, so a value that happens to
//! contain a marker is emitted literally.
//!
//! Deleting a line merges the blank runs on either side of it into the
//! longer of the two; spacing elsewhere in the template is left alone.
//!
//! The engine never fails. Steps whose pattern is absent are no-ops.


use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use tracing::trace;

use crate::catalog::{Language, Protocol};
use crate::deployment::{AuthMode, DeploymentConfig};
use crate::form::FormState;
use crate::token::Token;

/// Matches any known marker
static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = Token::ALL
        .iter()
        .map(|t| regex::escape(t.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("placeholder markers should form a valid regex")
});

/// Inputs visible to guards during a render
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub protocol: Protocol,
    pub language: Language,
    pub form: &'a FormState,
    pub deployment: &'a DeploymentConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        protocol: Protocol,
        language: Language,
        form: &'a FormState,
        deployment: &'a DeploymentConfig,
    ) -> Self {
        Self {
            protocol,
            language,
            form,
            deployment,
        }
    }
}

/// Predicate deciding whether a step runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    HeadersEnabled,
    HeadersDisabled,
    /// Async produce requested, and the language takes an explicit flag
    AsyncProduce,
    /// Account id configured and token auth in use
    AccountIdClause,
    PasswordAuth,
}

impl Guard {
    pub fn holds(self, ctx: &RenderContext<'_>) -> bool {
        match self {
            Guard::Always => true,
            Guard::HeadersEnabled => ctx.form.use_headers,
            Guard::HeadersDisabled => !ctx.form.use_headers,
            Guard::AsyncProduce => ctx.form.async_produce && ctx.language != Language::Python,
            Guard::AccountIdClause => {
                ctx.deployment.account_id.is_some()
                    && ctx.deployment.auth_mode == AuthMode::ConnectionToken
            }
            Guard::PasswordAuth => ctx.deployment.auth_mode == AuthMode::Password,
        }
    }
}

/// How expanded block fragments are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// One fragment per line, indented like the placeholder line
    Lines,
    /// Fragments joined on the placeholder line with a fixed string
    Inline(&'static str),
}

impl Separator {
    fn join(self, fragments: &[String], indent: &str) -> String {
        match self {
            Separator::Lines => fragments.join(&format!("\n{indent}")),
            Separator::Inline(s) => fragments.join(s),
        }
    }
}

/// Value substituted for one marker by [`Action::Fill`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Text(String),
    /// Fragments joined with `separator`, indented like the marker's line
    Block {
        fragments: Vec<String>,
        separator: Separator,
    },
}

/// Text transformation performed by a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace every occurrence of `pattern` with `value`
    ReplaceAll {
        pattern: Cow<'static, str>,
        value: String,
    },
    /// Remove every line containing `token`
    DeleteLines { token: Token },
    /// Substitute a block built from `fragments` for `token`; deletes the
    /// line when there are no fragments
    ExpandBlock {
        token: Token,
        fragments: Vec<String>,
        separator: Separator,
    },
    /// Substitute every listed marker in one pass; unlisted markers are kept
    Fill { values: Vec<(Token, Fill)> },
}

impl Action {
    pub fn replace(token: Token, value: impl Into<String>) -> Self {
        Action::ReplaceAll {
            pattern: Cow::Borrowed(token.as_str()),
            value: value.into(),
        }
    }

    pub fn replace_text(pattern: &'static str, value: impl Into<String>) -> Self {
        Action::ReplaceAll {
            pattern: Cow::Borrowed(pattern),
            value: value.into(),
        }
    }

    /// Value this action fills in for `token`, if it is a [`Action::Fill`]
    pub fn fill_for(&self, token: Token) -> Option<&Fill> {
        match self {
            Action::Fill { values } => values.iter().find(|(t, _)| *t == token).map(|(_, f)| f),
            _ => None,
        }
    }

    /// Apply this action to `text`
    pub fn run(&self, text: &str) -> String {
        match self {
            Action::ReplaceAll { pattern, value } => {
                if pattern.is_empty() {
                    text.to_string()
                } else {
                    text.replace(pattern.as_ref(), value)
                }
            }
            Action::DeleteLines { token } => delete_lines(text, token.as_str()),
            Action::ExpandBlock {
                token,
                fragments,
                separator,
            } => expand_block(text, *token, fragments, *separator),
            Action::Fill { values } => fill(text, values),
        }
    }
}

/// A named, guarded action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub guard: Guard,
    pub action: Action,
}

impl Step {
    pub fn new(name: &'static str, guard: Guard, action: Action) -> Self {
        Self {
            name,
            guard,
            action,
        }
    }

    pub fn always(name: &'static str, action: Action) -> Self {
        Self::new(name, Guard::Always, action)
    }
}

/// Run `steps` over `template` in order
pub fn apply(template: &str, steps: &[Step], ctx: &RenderContext<'_>) -> String {
    let mut text = template.to_string();
    for step in steps {
        if !step.guard.holds(ctx) {
            trace!(step = step.name, guard = ?step.guard, "guard not satisfied, skipping");
            continue;
        }
        text = step.action.run(&text);
        trace!(step = step.name, "applied");
    }
    text
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drop lines containing `needle`. Where a deleted line sat between two
/// blank runs, only the longer run is kept.
fn delete_lines(text: &str, needle: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blanks_before = 0usize;
    let mut to_skip = 0usize;
    for line in text.split_inclusive('\n') {
        if line.contains(needle) {
            to_skip = blanks_before;
            continue;
        }
        if is_blank(line) {
            if to_skip > 0 {
                to_skip -= 1;
                continue;
            }
            blanks_before += 1;
        } else {
            blanks_before = 0;
            to_skip = 0;
        }
        out.push_str(line);
    }
    out
}

fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start().len();
    &line[..end]
}

fn expand_block(text: &str, token: Token, fragments: &[String], separator: Separator) -> String {
    let marker = token.as_str();
    if !text.contains(marker) {
        return text.to_string();
    }
    if fragments.is_empty() {
        return delete_lines(text, marker);
    }

    text.split_inclusive('\n')
        .map(|line| {
            if !line.contains(marker) {
                return Cow::Borrowed(line);
            }
            let block = separator.join(fragments, leading_whitespace(line));
            Cow::Owned(line.replace(marker, &block))
        })
        .collect()
}

fn fill(text: &str, values: &[(Token, Fill)]) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            let indent = leading_whitespace(line);
            MARKER_RE.replace_all(line, |caps: &Captures<'_>| {
                let marker = &caps[0];
                let value = Token::from_marker(marker)
                    .and_then(|token| values.iter().find(|(t, _)| *t == token));
                match value {
                    Some((_, Fill::Text(value))) => value.clone(),
                    Some((_, Fill::Block {
                        fragments,
                        separator,
                    })) => separator.join(fragments, indent),
                    None => marker.to_string(),
                }
            })
        })
        .collect()
}
