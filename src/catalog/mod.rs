//! # Catalog Module
//!
//! The catalog is the static table of snippet templates, keyed by
//! [`Protocol`] and [`Language`]. Each entry is a [`TemplateBundle`] holding
//! the producer, consumer and (REST only) token-generation templates, the
//! installation command shown above the snippet, and the syntax id the
//! editor uses for highlighting.
//!
//! ## Documentation-only entries
//!
//! Some pairs have no inline example. Those bundles carry a `link` to the
//! external documentation and empty templates; [`crate::render`] turns them
//! into [`crate::Snippet::Documentation`] instead of substituting.
//!
//! ## Unsupported pairs
//!
//! A pair missing from the table is a configuration error
//! ([`CatalogError::UnsupportedCombination`]). Front ends should only offer
//! the pairs returned by [`supported`].
//!
//! ## Template files
//!
//! Templates are plain text files under `templates/{protocol}/{language}/`
//! compiled into the binary:
//!
//! - `producer.txt` - Producer snippet
//! - `consumer.txt` - Consumer snippet
//! - `token_generate.txt` - REST gateway authentication snippet

mod table;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use table::CATALOG;

/// How the generated code talks to the broker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Persistent client library connection
    Sdk,
    /// HTTP calls against the REST gateway
    Rest,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Sdk => write!(f, "SDK"),
            Protocol::Rest => write!(f, "REST"),
        }
    }
}

/// Target language of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    #[value(name = "nodejs", alias = "node")]
    NodeJs,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    #[value(name = "nestjs")]
    NestJs,
    Python,
    #[value(name = "dotnet", alias = "csharp")]
    DotNet,
    Rust,
    Curl,
    Java,
    /// Browser `fetch` API
    #[value(name = "javascript", alias = "fetch")]
    JavaScript,
}

impl Language {
    /// Human-readable label, as shown in a language picker
    pub const fn label(self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::NodeJs => "Node.js",
            Language::TypeScript => "TypeScript",
            Language::NestJs => "NestJS",
            Language::Python => "Python",
            Language::DotNet => ".NET",
            Language::Rust => "Rust",
            Language::Curl => "cURL",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript - Fetch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which snippet of a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Producer,
    Consumer,
    /// REST gateway JWT generation
    #[value(name = "token-generate", alias = "token")]
    TokenGenerate,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Producer => write!(f, "producer"),
            Role::Consumer => write!(f, "consumer"),
            Role::TokenGenerate => write!(f, "token_generate"),
        }
    }
}

/// Templates and metadata for one (protocol, language) pair
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateBundle {
    pub protocol: Protocol,
    pub language: Language,
    #[serde(skip)]
    pub producer: &'static str,
    #[serde(skip)]
    pub consumer: &'static str,
    #[serde(skip)]
    pub token_generate: Option<&'static str>,
    /// Package installation command
    pub installation: &'static str,
    /// Editor syntax-highlighting id
    pub lang_code: &'static str,
    /// External documentation; set when there is no inline example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

impl TemplateBundle {
    pub fn is_documentation_only(&self) -> bool {
        self.link.is_some()
    }

    /// Template for a role, if the bundle has one
    pub fn template(&self, role: Role) -> Option<&'static str> {
        if self.is_documentation_only() {
            return None;
        }
        match role {
            Role::Producer => Some(self.producer),
            Role::Consumer => Some(self.consumer),
            Role::TokenGenerate => self.token_generate,
        }
    }
}

/// Error returned when selecting from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The pair is not part of the static table
    UnsupportedCombination {
        protocol: Protocol,
        language: Language,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnsupportedCombination { protocol, language } => write!(
                f,
                "no {protocol} code example exists for {language}; \
                 pick one of the supported languages for this protocol"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Every bundle in the catalog, in display order
pub fn supported() -> &'static [TemplateBundle] {
    &CATALOG
}

/// Bundles for a single protocol, in display order
pub fn languages_for(protocol: Protocol) -> impl Iterator<Item = &'static TemplateBundle> {
    CATALOG.iter().filter(move |b| b.protocol == protocol)
}

/// Select the bundle for a (protocol, language) pair
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedCombination`] if the pair is not in the table.
pub fn lookup(
    protocol: Protocol,
    language: Language,
) -> Result<&'static TemplateBundle, CatalogError> {
    CATALOG
        .iter()
        .find(|b| b.protocol == protocol && b.language == language)
        .ok_or(CatalogError::UnsupportedCombination { protocol, language })
}
