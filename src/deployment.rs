//! # Deployment Configuration Module
//!
//! Describes the broker deployment the snippets should point at. The values
//! are injected into [`crate::render`] explicitly, so rendering never reads
//! ambient state.
//!
//! ## Layers
//!
//! 1. Built-in defaults (local deployment, token auth, gateway port 4444)
//! 2. TOML file: `--config <FILE>` or `memphis-snippets.toml` in the working directory
//! 3. Environment variables
//!
//! ## Environment Variables
//!
//! - `MEMPHIS_HOST` - Broker host name (or REST gateway host for cloud)
//! - `MEMPHIS_ENV` - `local`, `docker`, `kubernetes`/`k8s` or `cloud`
//! - `MEMPHIS_REST_PORT` - REST gateway port
//! - `MEMPHIS_ACCOUNT_ID` - Numeric account id
//! - `MEMPHIS_AUTH_MODE` - `token` or `password`
//!
//! Unparseable values are ignored and the lower layer wins.
//!
//! ## Example File
//!
//! ```toml
//! host = "broker.example.com"
//! environment = "kubernetes"
//! rest_port = 4444
//! account_id = 223671990
//! auth_mode = "password"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::catalog::Protocol;

/// File name looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "memphis-snippets.toml";

const DEFAULT_REST_PORT: u16 = 4444;
const CLUSTER_BROKER_HOST: &str = "memphis.memphis.svc.cluster.local";
const CLUSTER_GATEWAY_HOST: &str = "memphis-rest-gateway.memphis.svc.cluster.local";
const CLOUD_HOST: &str = "cloud.memphis.dev";

/// Where the broker runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Docker,
    #[serde(alias = "k8s")]
    Kubernetes,
    Cloud,
}

impl Environment {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Some(Environment::Local),
            "docker" => Some(Environment::Docker),
            "kubernetes" | "k8s" => Some(Environment::Kubernetes),
            "cloud" => Some(Environment::Cloud),
            _ => None,
        }
    }
}

/// Credential kind used by generated clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    #[serde(alias = "token")]
    ConnectionToken,
    Password,
}

impl AuthMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "token" | "connection_token" | "connection-token" => Some(AuthMode::ConnectionToken),
            "password" => Some(AuthMode::Password),
            _ => None,
        }
    }
}

/// Deployment settings substituted into every snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Explicit host; when unset a per-environment default is used
    pub host: Option<String>,
    pub environment: Environment,
    /// REST gateway port (ignored for cloud, which is served over https)
    pub rest_port: u16,
    pub account_id: Option<u64>,
    pub auth_mode: AuthMode,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            host: None,
            environment: Environment::Local,
            rest_port: DEFAULT_REST_PORT,
            account_id: None,
            auth_mode: AuthMode::ConnectionToken,
        }
    }
}

impl DeploymentConfig {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Overlay values from a variable lookup (normally the process environment)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("MEMPHIS_HOST").filter(|h| !h.trim().is_empty()) {
            self.host = Some(host.trim().to_string());
        }
        if let Some(environment) = lookup("MEMPHIS_ENV").and_then(|v| Environment::parse(&v)) {
            self.environment = environment;
        }
        if let Some(port) = lookup("MEMPHIS_REST_PORT").and_then(|v| v.trim().parse().ok()) {
            self.rest_port = port;
        }
        if let Some(account_id) = lookup("MEMPHIS_ACCOUNT_ID").and_then(|v| v.trim().parse().ok())
        {
            self.account_id = Some(account_id);
        }
        if let Some(mode) = lookup("MEMPHIS_AUTH_MODE").and_then(|v| AuthMode::parse(&v)) {
            self.auth_mode = mode;
        }
    }

    /// Value for the `<memphis-host>` placeholder
    ///
    /// SDK snippets get a bare host name; REST snippets get the gateway base URL.
    pub fn host_for(&self, protocol: Protocol) -> String {
        let host = self.host.as_deref().map(str::trim).filter(|h| !h.is_empty());
        match protocol {
            Protocol::Sdk => host
                .map(str::to_string)
                .unwrap_or_else(|| self.default_broker_host().to_string()),
            Protocol::Rest => {
                if let Some(h) = host.filter(|h| h.contains("://")) {
                    return h.trim_end_matches('/').to_string();
                }
                match self.environment {
                    Environment::Cloud => format!("https://{}", host.unwrap_or(CLOUD_HOST)),
                    Environment::Kubernetes => format!(
                        "http://{}:{}",
                        host.unwrap_or(CLUSTER_GATEWAY_HOST),
                        self.rest_port
                    ),
                    Environment::Local | Environment::Docker => {
                        format!("http://{}:{}", host.unwrap_or("localhost"), self.rest_port)
                    }
                }
            }
        }
    }

    fn default_broker_host(&self) -> &'static str {
        match self.environment {
            Environment::Local | Environment::Docker => "localhost",
            Environment::Kubernetes => CLUSTER_BROKER_HOST,
            Environment::Cloud => CLOUD_HOST,
        }
    }
}

/// Load deployment configuration from a TOML file
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// fails to parse.
pub fn load_deployment_config(config_path: &Path) -> anyhow::Result<Option<DeploymentConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read deployment config: {}",
            config_path.display()
        )
    })?;

    let config: DeploymentConfig = toml::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse deployment config: {}",
            config_path.display()
        )
    })?;

    Ok(Some(config))
}

/// Resolve the deployment config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. [`DEFAULT_CONFIG_FILE`] in `dir`
/// 3. None (defaults only)
pub fn resolve_config_path(explicit_path: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}

/// Build the effective configuration: defaults, then file, then environment
///
/// # Errors
///
/// Returns an error if an explicitly requested file is missing, or if the
/// resolved file cannot be parsed.
pub fn load_layered(explicit_path: Option<&Path>, dir: &Path) -> anyhow::Result<DeploymentConfig> {
    let mut config = match resolve_config_path(explicit_path, dir) {
        Some(path) => match load_deployment_config(&path)? {
            Some(config) => config,
            None => anyhow::bail!("Deployment config not found: {}", path.display()),
        },
        None => DeploymentConfig::default(),
    };
    config.apply_overrides(|key| env::var(key).ok());
    Ok(config)
}
