//! # CLI Module
//!
//! Command-line front end for rendering Memphis code examples.
//!
//! ## Commands
//!
//! ### `render`
//!
//! Render the producer/consumer (and, for REST, token generation) snippets:
//!
//! ```bash
//! memphis-snippets render --protocol sdk --language python --station orders
//! ```
//!
//! Options:
//! - `--form <FILE>` - form values as YAML or JSON
//! - `--config <FILE>` - deployment config (default: `memphis-snippets.toml` if present)
//! - `--station`, `--username` - override single form fields
//! - `--role <ROLE>` - print one snippet only (`producer`, `consumer`, `token-generate`)
//! - `--json` - machine-readable output
//! - `--broker-url`, `--broker-token` - pre-fill an empty username from the broker
//!
//! ### `catalog`
//!
//! ```bash
//! memphis-snippets catalog --protocol rest
//! ```
//!
//! ### `lint`
//!
//! ```bash
//! memphis-snippets lint --fail-on-error
//! ```
//!
//! ### `users`
//!
//! ```bash
//! memphis-snippets users --broker-url http://localhost:9000 --stations
//! ```
//!
//! Deployment settings can also come from `MEMPHIS_HOST`, `MEMPHIS_ENV`,
//! `MEMPHIS_REST_PORT`, `MEMPHIS_ACCOUNT_ID` and `MEMPHIS_AUTH_MODE`.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
