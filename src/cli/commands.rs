use crate::{
    catalog::{self, Language, Protocol, Role},
    deployment::load_layered,
    directory::BrokerDirectory,
    form::{load_form, FormState},
    linter,
    logging::{init_logging_with_config, LogConfig},
    render, Snippet,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Command-line interface for memphis-snippets
///
/// Renders Memphis producer/consumer code examples and checks the
/// template catalog.
#[derive(Parser)]
#[command(name = "memphis-snippets")]
#[command(about = "Memphis client code example generator", long_about = None)]
pub struct Cli {
    /// Log at debug level (overrides SNIPPETS_LOG_LEVEL when it is quieter)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the code examples for one protocol/language pair
    Render {
        /// Connection style
        #[arg(short, long, value_enum)]
        protocol: Protocol,

        /// Target language
        #[arg(short, long, value_enum)]
        language: Language,

        /// Form values (YAML or JSON, chosen by extension)
        #[arg(short, long)]
        form: Option<PathBuf>,

        /// Deployment config file (default: memphis-snippets.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Station name, overriding the form file
        #[arg(long)]
        station: Option<String>,

        /// Application username, overriding the form file
        #[arg(long)]
        username: Option<String>,

        /// Print only this snippet, without decoration
        #[arg(long, value_enum)]
        role: Option<Role>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Broker management API, used to pre-fill an empty username
        #[arg(long, env = "MEMPHIS_BROKER_URL")]
        broker_url: Option<String>,

        /// Bearer token for the broker management API
        #[arg(long, env = "MEMPHIS_BROKER_TOKEN", hide_env_values = true)]
        broker_token: Option<String>,
    },
    /// List the supported protocol/language pairs
    Catalog {
        /// Only list pairs for this protocol
        #[arg(short, long, value_enum)]
        protocol: Option<Protocol>,
    },
    /// Render every template and report placeholders left behind
    ///
    /// Without `--form` a fully populated sample form is used, so any
    /// residual placeholder is a template or pipeline defect.
    Lint {
        /// Deployment config file (default: memphis-snippets.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Lint with these form values instead of the sample form
        #[arg(short, long)]
        form: Option<PathBuf>,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// List application users known to a broker
    Users {
        /// Broker management API base URL
        #[arg(long, env = "MEMPHIS_BROKER_URL")]
        broker_url: String,

        /// Bearer token for the broker management API
        #[arg(long, env = "MEMPHIS_BROKER_TOKEN", hide_env_values = true)]
        broker_token: Option<String>,

        /// Also list stations
        #[arg(long, default_value_t = false)]
        stations: bool,
    },
}

/// Parse command-line arguments and execute the requested command
///
/// # Errors
///
/// Returns an error if logging cannot be initialised, a config or form file
/// cannot be read, or the requested pair is not in the catalog.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    let _log_guard = init_logging_with_config(&log_config)?;

    match &cli.command {
        Commands::Render {
            protocol,
            language,
            form,
            config,
            station,
            username,
            role,
            json,
            broker_url,
            broker_token,
        } => {
            let cwd = std::env::current_dir()?;
            let deployment = load_layered(config.as_deref(), &cwd)?;
            let mut form_state = match form {
                Some(path) => load_form(path)?,
                None => FormState::default(),
            };
            if let Some(station) = station {
                form_state.station_name = station.clone();
            }
            if let Some(username) = username {
                form_state.username = username.clone();
            }
            if form_state.username.trim().is_empty() {
                if let Some(url) = broker_url {
                    let directory = BrokerDirectory::new(url, broker_token.clone())?;
                    if let Some(first) = directory.application_users().into_iter().next() {
                        info!(username = %first, "pre-filled username from broker");
                        form_state.username = first;
                    }
                }
            }

            let bundle = catalog::lookup(*protocol, *language)?;
            let snippet = render(*protocol, *language, &form_state, &deployment)?;
            info!(%protocol, %language, "rendered code example");

            match (&snippet, role) {
                (Snippet::Documentation { link }, _) => {
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&snippet)?);
                    } else {
                        println!("No inline {protocol} example for {language}.");
                        println!("See {link}");
                    }
                }
                (Snippet::Rendered(example), Some(role)) => {
                    let text = example.get(*role).ok_or_else(|| {
                        format!("{protocol} {language} has no {role} example")
                    })?;
                    if *json {
                        let value = serde_json::json!({ "role": role, "snippet": text });
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    } else {
                        print!("{text}");
                    }
                }
                (Snippet::Rendered(example), None) => {
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&snippet)?);
                    } else {
                        println!("# Install: {}", bundle.installation);
                        for (role, text) in example.roles() {
                            println!("\n# ---- {role} ({}) ----", bundle.lang_code);
                            print!("{text}");
                        }
                    }
                }
            }
            Ok(())
        }
        Commands::Catalog { protocol } => {
            let bundles: Vec<_> = match protocol {
                Some(p) => catalog::languages_for(*p).collect(),
                None => catalog::supported().iter().collect(),
            };
            println!("{:<6} {:<12} {:<12} INSTALL / DOCS", "PROTO", "LANGUAGE", "SYNTAX");
            for bundle in bundles {
                let id = bundle
                    .language
                    .to_possible_value()
                    .map(|v| v.get_name().to_string())
                    .unwrap_or_else(|| bundle.language.label().to_string());
                let install = bundle.link.unwrap_or(bundle.installation);
                println!(
                    "{:<6} {:<12} {:<12} {}",
                    bundle.protocol.to_string(),
                    id,
                    bundle.lang_code,
                    install
                );
            }
            Ok(())
        }
        Commands::Lint {
            config,
            form,
            fail_on_error,
            errors_only,
        } => {
            let cwd = std::env::current_dir()?;
            let deployment = load_layered(config.as_deref(), &cwd)?;
            let form_state = match form {
                Some(path) => load_form(path)?,
                None => linter::sample_form(),
            };
            let issues = linter::lint_catalog(&form_state, &deployment);

            if *errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == linter::LintSeverity::Error)
                    .cloned()
                    .collect();
                linter::print_lint_issues(&errors);
                if *fail_on_error {
                    linter::fail_if_errors(&errors);
                }
            } else {
                linter::print_lint_issues(&issues);
                if *fail_on_error {
                    linter::fail_if_errors(&issues);
                }
            }

            Ok(())
        }
        Commands::Users {
            broker_url,
            broker_token,
            stations,
        } => {
            let directory = BrokerDirectory::new(broker_url, broker_token.clone())?;
            let users = directory.application_users();
            if users.is_empty() {
                println!("No application users found");
            } else {
                println!("Application users:");
                for user in &users {
                    println!("  {user}");
                }
            }
            if *stations {
                let names = directory.stations();
                if names.is_empty() {
                    println!("No stations found");
                } else {
                    println!("Stations:");
                    for name in &names {
                        println!("  {name}");
                    }
                }
            }
            Ok(())
        }
    }
}
