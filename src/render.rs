//! Rendering façade: catalog selection plus pipeline execution.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::catalog::{self, CatalogError, Language, Protocol, Role};
use crate::deployment::DeploymentConfig;
use crate::engine::{self, RenderContext};
use crate::form::FormState;
use crate::logging::redact;
use crate::pipeline;

/// Fully substituted snippets for one (protocol, language) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedExample {
    pub producer: String,
    pub consumer: String,
    /// Present only for bundles with a token-generation template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_generate: Option<String>,
}

impl RenderedExample {
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Producer => Some(&self.producer),
            Role::Consumer => Some(&self.consumer),
            Role::TokenGenerate => self.token_generate.as_deref(),
        }
    }

    /// Rendered roles in display order
    pub fn roles(&self) -> impl Iterator<Item = (Role, &str)> {
        [Role::Producer, Role::Consumer, Role::TokenGenerate]
            .into_iter()
            .filter_map(move |role| self.get(role).map(|text| (role, text)))
    }
}

/// Result of a render request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Snippet {
    Rendered(RenderedExample),
    /// No inline example exists; point the user at the documentation
    Documentation { link: &'static str },
}

/// Render the snippets for a (protocol, language) pair
///
/// Form content never causes an error: missing numbers fall back to
/// defaults, disabled features lose their lines and blank text fields keep
/// their placeholder.
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedCombination`] if the pair is not in the catalog.
///
/// # Example
///
/// ```rust
/// use memphis_snippets::{render, DeploymentConfig, FormState, Language, Protocol, Snippet};
///
/// let form = FormState {
///     station_name: "orders".into(),
///     ..FormState::default()
/// };
/// let snippet = render(Protocol::Sdk, Language::Go, &form, &DeploymentConfig::default()).unwrap();
/// match snippet {
///     Snippet::Rendered(example) => assert!(example.producer.contains("\"orders\"")),
///     Snippet::Documentation { .. } => unreachable!(),
/// }
/// ```
pub fn render(
    protocol: Protocol,
    language: Language,
    form: &FormState,
    deployment: &DeploymentConfig,
) -> Result<Snippet, CatalogError> {
    let bundle = catalog::lookup(protocol, language)?;
    if let Some(link) = bundle.link {
        debug!(%protocol, %language, link, "no inline example, documentation only");
        return Ok(Snippet::Documentation { link });
    }

    let span = debug_span!(
        "render",
        %protocol,
        %language,
        station = %form.station_name,
        credential = %redact(&form.password),
        auth_mode = ?deployment.auth_mode,
    );
    let _entered = span.enter();

    let ctx = RenderContext::new(protocol, language, form, deployment);
    let steps = pipeline::build(&ctx);
    debug!(steps = steps.len(), "pipeline built");

    let run = |template: &str| engine::apply(template, &steps, &ctx);
    Ok(Snippet::Rendered(RenderedExample {
        producer: run(bundle.producer),
        consumer: run(bundle.consumer),
        token_generate: bundle.token_generate.map(run),
    }))
}
