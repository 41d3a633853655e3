//! # memphis-snippets
//!
//! **memphis-snippets** renders ready-to-run client code for a Memphis broker: producer,
//! consumer and (for the REST gateway) JWT token generation snippets in a dozen languages,
//! filled in from what the user typed into the "code example" form.
//!
//! ## Overview
//!
//! A snippet starts life as a static template full of `<placeholder>` markers. Rendering
//! runs an ordered list of rewrite steps over it: structural edits first (header blocks,
//! async flags, the account-id clause, credential naming), then the user's own values,
//! then a final blank-line cleanup. The templates themselves are never modified.
//!
//! ## Architecture
//!
//! - **[`catalog`]** - static table of template bundles keyed by (protocol, language)
//! - **[`token`]** - the placeholder markers templates may contain
//! - **[`form`]** - form state plus the normalisation helpers for it
//! - **[`deployment`]** - host/account/auth settings, layered from defaults, TOML and env
//! - **[`engine`]** - the rule interpreter: guarded steps and the actions they run
//! - **[`profile`]** - per-language header syntax, async flag and account-id clause
//! - **[`pipeline`]** - builds the ordered step list for one render
//! - **[`render`]** - the façade tying catalog, pipeline and engine together
//! - **[`linter`]** - reports placeholders left behind after rendering
//! - **[`directory`]** - optional broker lookups to pre-fill the form
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `memphis-snippets` command
//!
//! ## Quick Start
//!
//! ```rust
//! use memphis_snippets::{render, DeploymentConfig, FormState, HeaderEntry, Language, Protocol, Snippet};
//!
//! let form = FormState {
//!     station_name: "orders".into(),
//!     use_headers: true,
//!     headers: vec![HeaderEntry::new("trace-id", "abc")],
//!     ..FormState::default()
//! };
//! let deployment = DeploymentConfig {
//!     account_id: Some(42),
//!     ..DeploymentConfig::default()
//! };
//!
//! if let Ok(Snippet::Rendered(example)) = render(Protocol::Sdk, Language::Go, &form, &deployment) {
//!     assert!(example.producer.contains("hdrs.Add(\"trace-id\", \"abc\")"));
//!     assert!(example.producer.contains("memphis.AccountId(42)"));
//! }
//! ```
//!
//! ## Command Line
//!
//! ```bash
//! # Go producer/consumer for the "orders" station
//! memphis-snippets render --protocol sdk --language go --station orders
//!
//! # REST snippets, form values from a file, JSON output
//! memphis-snippets render --protocol rest --language curl --form form.yaml --json
//!
//! # Make sure every template renders clean
//! memphis-snippets lint --fail-on-error
//! ```

pub mod catalog;
pub mod cli;
pub mod deployment;
pub mod directory;
pub mod engine;
pub mod form;
pub mod linter;
pub mod logging;
pub mod pipeline;
pub mod profile;
pub mod render;
pub mod token;

pub use catalog::{CatalogError, Language, Protocol, Role, TemplateBundle};
pub use deployment::{AuthMode, DeploymentConfig, Environment};
pub use form::{FormState, HeaderEntry};
pub use render::{render, RenderedExample, Snippet};
pub use token::Token;
