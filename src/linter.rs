//! # Catalog Linter
//!
//! Renders every inline catalog entry and reports anything a user would
//! have to fix by hand before the snippet runs.
//!
//! ## Checks Performed
//!
//! 1. **residual_placeholder** (error) - a known `<token>` survived rendering
//! 2. **unknown_placeholder** (warning) - something that looks like a
//!    placeholder but is not a known token
//! 3. **empty_snippet** (warning) - a role rendered to nothing
//!
//! With a fully populated form (see [`sample_form`]) the catalog must lint
//! clean.
//!
//! ## Usage
//!
//! ```rust
//! use memphis_snippets::linter::{lint_catalog, sample_form, LintSeverity};
//! use memphis_snippets::DeploymentConfig;
//!
//! let issues = lint_catalog(&sample_form(), &DeploymentConfig::default());
//! assert!(issues.iter().all(|i| i.severity != LintSeverity::Error));
//! ```


use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::catalog::{self, Role};
use crate::deployment::DeploymentConfig;
use crate::form::{FormState, HeaderEntry};
use crate::render::{render, Snippet};
use crate::token::Token;

/// Lower-case marker with at least one dash or space, e.g. `<station-name>`
static PLACEHOLDER_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"<[a-z][a-z0-9]*(?:[- ][a-z0-9]+)+>").ok());

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// The snippet will not run as rendered
    Error,
    /// Probably wrong, worth a look
    Warning,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found in a rendered snippet
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g. "SDK Go producer:12")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g. "residual_placeholder")
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A form with every field populated, used as the lint baseline
pub fn sample_form() -> FormState {
    FormState {
        username: "app_user".into(),
        password: "app-connection-token".into(),
        station_name: "orders".into(),
        producer_name: "orders_producer".into(),
        consumer_name: "orders_consumer".into(),
        consumer_group: "orders_consumers".into(),
        headers: vec![HeaderEntry::new("trace-id", "abc123")],
        use_headers: true,
        async_produce: true,
        batch_size: "10".into(),
        batch_max_wait_time_ms: "5000".into(),
        token_expiry: "100".into(),
        refresh_token_expiry: "10000092".into(),
        jwt_token: "eyJhbGciOiJIUzI1NiJ9.e30.sig".into(),
    }
}

/// Check one rendered snippet
pub fn lint_snippet(location: &str, text: &str) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    if text.trim().is_empty() {
        issues.push(LintIssue::new(
            location,
            LintSeverity::Warning,
            "empty_snippet",
            "Snippet rendered to an empty string",
        ));
        return issues;
    }

    for (idx, line) in text.lines().enumerate() {
        let at = format!("{location}:{}", idx + 1);
        for token in Token::ALL {
            if line.contains(token.as_str()) {
                issues.push(
                    LintIssue::new(
                        at.clone(),
                        LintSeverity::Error,
                        "residual_placeholder",
                        format!("Placeholder {token} was not substituted"),
                    )
                    .with_suggestion(suggestion_for(token)),
                );
            }
        }
        if let Some(re) = PLACEHOLDER_RE.as_ref() {
            for m in re.find_iter(line) {
                if Token::from_marker(m.as_str()).is_none() {
                    issues.push(LintIssue::new(
                        at.clone(),
                        LintSeverity::Warning,
                        "unknown_placeholder",
                        format!("{} looks like a placeholder but no rule fills it", m.as_str()),
                    ));
                }
            }
        }
    }
    issues
}

fn suggestion_for(token: Token) -> &'static str {
    match token {
        Token::MemphisHost => "Set MEMPHIS_HOST or `host` in the deployment config",
        Token::AccountId => "Set MEMPHIS_ACCOUNT_ID or `account_id` in the deployment config",
        Token::BrokerToken | Token::Password => "Fill in the `password` form field",
        Token::HeaderKey | Token::HeaderValue => "Give every header entry a key and a value",
        _ => "Fill in the matching form field",
    }
}

/// Render every inline catalog entry with `form` and lint the output
pub fn lint_catalog(form: &FormState, deployment: &DeploymentConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for bundle in catalog::supported() {
        let location = format!("{} {}", bundle.protocol, bundle.language);
        match render(bundle.protocol, bundle.language, form, deployment) {
            Ok(Snippet::Rendered(example)) => {
                for (role, text) in example.roles() {
                    issues.extend(lint_snippet(&format!("{location} {role}"), text));
                }
                if bundle.token_generate.is_some() && example.get(Role::TokenGenerate).is_none() {
                    issues.push(LintIssue::new(
                        location,
                        LintSeverity::Warning,
                        "empty_snippet",
                        "Token generation template was not rendered",
                    ));
                }
            }
            Ok(Snippet::Documentation { .. }) => {}
            Err(err) => issues.push(LintIssue::new(
                location,
                LintSeverity::Error,
                "unsupported_combination",
                err.to_string(),
            )),
        }
    }
    issues
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();

    println!("\n📋 Lint Results:");
    println!("   {} error(s), {} warning(s)\n", errors.len(), warnings.len());

    for (title, group) in [
        ("❌ Errors (must fix):", &errors),
        ("⚠️  Warnings (should fix):", &warnings),
    ] {
        if group.is_empty() {
            continue;
        }
        println!("{title}");
        for issue in group.iter() {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }
}

/// Whether any issue is an error
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print the issues and exit with status 1 if any of them is an error
pub fn fail_if_errors(issues: &[LintIssue]) {
    if has_errors(issues) {
        print_lint_issues(issues);
        std::process::exit(1);
    }
}
