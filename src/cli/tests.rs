#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Unit tests for CLI argument parsing

use crate::catalog::{Language, Protocol, Role};
use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_render_command_minimal() {
    let cli = Cli::try_parse_from([
        "memphis-snippets",
        "render",
        "--protocol",
        "sdk",
        "--language",
        "go",
    ])
    .unwrap();

    match cli.command {
        Commands::Render {
            protocol,
            language,
            form,
            role,
            json,
            ..
        } => {
            assert_eq!(protocol, Protocol::Sdk);
            assert_eq!(language, Language::Go);
            assert!(form.is_none());
            assert!(role.is_none());
            assert!(!json);
        }
        _ => panic!("Expected Render command"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_render_command_language_aliases() {
    for (arg, expected) in [
        ("node", Language::NodeJs),
        ("csharp", Language::DotNet),
        ("fetch", Language::JavaScript),
    ] {
        let cli = Cli::try_parse_from([
            "memphis-snippets",
            "render",
            "-p",
            "rest",
            "-l",
            arg,
        ])
        .unwrap();
        match cli.command {
            Commands::Render { language, .. } => assert_eq!(language, expected, "alias {arg}"),
            _ => panic!("Expected Render command"),
        }
    }
}

#[test]
fn test_render_command_with_flags() {
    let cli = Cli::try_parse_from([
        "memphis-snippets",
        "--verbose",
        "render",
        "--protocol",
        "rest",
        "--language",
        "curl",
        "--form",
        "form.yaml",
        "--station",
        "orders",
        "--role",
        "token-generate",
        "--json",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Render {
            form,
            station,
            role,
            json,
            ..
        } => {
            assert_eq!(form.unwrap().to_string_lossy(), "form.yaml");
            assert_eq!(station.as_deref(), Some("orders"));
            assert_eq!(role, Some(Role::TokenGenerate));
            assert!(json);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn test_render_requires_language() {
    let result = Cli::try_parse_from(["memphis-snippets", "render", "--protocol", "sdk"]);
    assert!(result.is_err());
}

#[test]
fn test_render_rejects_unknown_language() {
    let result = Cli::try_parse_from([
        "memphis-snippets",
        "render",
        "--protocol",
        "sdk",
        "--language",
        "cobol",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "memphis-snippets",
        "lint",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            config,
            form,
            fail_on_error,
            errors_only,
        } => {
            assert!(config.is_none());
            assert!(form.is_none());
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_catalog_command() {
    let cli = Cli::try_parse_from(["memphis-snippets", "catalog", "--protocol", "rest"]).unwrap();
    match cli.command {
        Commands::Catalog { protocol } => assert_eq!(protocol, Some(Protocol::Rest)),
        _ => panic!("Expected Catalog command"),
    }
}

#[test]
fn test_users_command() {
    let cli = Cli::try_parse_from([
        "memphis-snippets",
        "users",
        "--broker-url",
        "http://localhost:9000",
        "--stations",
    ])
    .unwrap();
    match cli.command {
        Commands::Users {
            broker_url,
            stations,
            ..
        } => {
            assert_eq!(broker_url, "http://localhost:9000");
            assert!(stations);
        }
        _ => panic!("Expected Users command"),
    }
}
