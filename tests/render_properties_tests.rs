#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end properties of the render pipeline over the whole catalog

use memphis_snippets::catalog;
use memphis_snippets::linter::sample_form;
use memphis_snippets::{
    render, AuthMode, DeploymentConfig, FormState, HeaderEntry, Language, Protocol,
    RenderedExample, Snippet, Token,
};

fn rendered(
    protocol: Protocol,
    language: Language,
    form: &FormState,
    deployment: &DeploymentConfig,
) -> RenderedExample {
    match render(protocol, language, form, deployment).unwrap() {
        Snippet::Rendered(example) => example,
        Snippet::Documentation { link } => panic!("{protocol} {language} is documentation only: {link}"),
    }
}

fn inline_pairs() -> impl Iterator<Item = (Protocol, Language)> {
    catalog::supported()
        .iter()
        .filter(|b| !b.is_documentation_only())
        .map(|b| (b.protocol, b.language))
}

#[test]
fn test_populated_form_leaves_no_placeholders() {
    let form = sample_form();
    for deployment in [
        DeploymentConfig::default(),
        DeploymentConfig {
            account_id: Some(7),
            ..DeploymentConfig::default()
        },
        DeploymentConfig {
            auth_mode: AuthMode::Password,
            ..DeploymentConfig::default()
        },
    ] {
        for (protocol, language) in inline_pairs() {
            let example = rendered(protocol, language, &form, &deployment);
            for (role, text) in example.roles() {
                for token in Token::ALL {
                    assert!(
                        !text.contains(token.as_str()),
                        "{protocol} {language} {role} still contains {token}:\n{text}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_headers_disabled_matches_baseline() {
    let deployment = DeploymentConfig::default();
    let baseline_form = FormState {
        use_headers: false,
        ..sample_form()
    };
    let noisy_form = FormState {
        use_headers: false,
        headers: vec![
            HeaderEntry::new("x-one", "1"),
            HeaderEntry::new("x-two", "2"),
            HeaderEntry::new("", ""),
        ],
        ..sample_form()
    };

    for (protocol, language) in inline_pairs() {
        let baseline = rendered(protocol, language, &baseline_form, &deployment);
        let noisy = rendered(protocol, language, &noisy_form, &deployment);
        assert_eq!(baseline, noisy, "{protocol} {language}");
        assert!(!noisy.producer.contains("x-one"), "{protocol} {language}");
        assert!(!noisy.producer.contains("<headers"), "{protocol} {language}");
    }
}

#[test]
fn test_password_mode_rewrites_credential_naming() {
    let deployment = DeploymentConfig {
        auth_mode: AuthMode::Password,
        account_id: Some(42),
        ..DeploymentConfig::default()
    };
    let form = FormState {
        password: "s3cret-value".into(),
        ..sample_form()
    };

    for (protocol, language) in inline_pairs() {
        let example = rendered(protocol, language, &form, &deployment);
        for (role, text) in example.roles() {
            for needle in [
                "connection_token",
                "ConnectionToken",
                "connectionToken",
                "<broker-token>",
            ] {
                assert!(
                    !text.contains(needle),
                    "{protocol} {language} {role} still contains {needle}"
                );
            }
        }
    }

    let go = rendered(Protocol::Sdk, Language::Go, &form, &deployment);
    assert!(go.producer.contains("memphis.Password(\"s3cret-value\")"));
    assert!(go.consumer.contains("memphis.Password(\"s3cret-value\")"));

    let python = rendered(Protocol::Sdk, Language::Python, &form, &deployment);
    assert!(python.producer.contains("password=\"s3cret-value\""));
    assert!(python.consumer.contains("password=\"s3cret-value\""));
}

#[test]
fn test_go_account_id_clause() {
    let form = sample_form();
    let token_mode = DeploymentConfig {
        account_id: Some(42),
        ..DeploymentConfig::default()
    };
    let go = rendered(Protocol::Sdk, Language::Go, &form, &token_mode);
    assert!(go.producer.contains("memphis.AccountId(42)"));
    assert!(go.consumer.contains("memphis.AccountId(42)"));

    let password_mode = DeploymentConfig {
        auth_mode: AuthMode::Password,
        ..token_mode
    };
    let go = rendered(Protocol::Sdk, Language::Go, &form, &password_mode);
    assert!(!go.producer.contains("AccountId"));
    assert!(!go.consumer.contains("AccountId"));
}

#[test]
fn test_account_id_absent_when_unset() {
    let form = sample_form();
    let deployment = DeploymentConfig::default();
    let node = rendered(Protocol::Sdk, Language::NodeJs, &form, &deployment);
    assert!(!node.producer.contains("accountId"));
    let python = rendered(Protocol::Sdk, Language::Python, &form, &deployment);
    assert!(!python.producer.contains("account_id"));
}

#[test]
fn test_python_header_rendered_once() {
    let form = FormState {
        use_headers: true,
        headers: vec![HeaderEntry::new("a", "b")],
        ..sample_form()
    };
    let python = rendered(
        Protocol::Sdk,
        Language::Python,
        &form,
        &DeploymentConfig::default(),
    );
    assert_eq!(python.producer.matches("headers.add(\"a\", \"b\")").count(), 1);
    assert!(python.producer.contains("headers = Headers()"));
    assert!(python.producer.contains(", headers=headers)"));
}

#[test]
fn test_render_is_stateless() {
    let deployment = DeploymentConfig::default();
    let form_a = sample_form();
    let form_b = FormState {
        station_name: "payments".into(),
        use_headers: false,
        async_produce: false,
        ..sample_form()
    };

    let first = rendered(Protocol::Sdk, Language::Go, &form_a, &deployment);
    let _ = rendered(Protocol::Rest, Language::Curl, &form_b, &deployment);
    let _ = rendered(Protocol::Sdk, Language::Go, &form_b, &deployment);
    let again = rendered(Protocol::Sdk, Language::Go, &form_a, &deployment);
    assert_eq!(first, again);
}

#[test]
fn test_rest_host_uses_gateway_url() {
    let deployment = DeploymentConfig {
        host: Some("broker.example.com".into()),
        rest_port: 4444,
        ..DeploymentConfig::default()
    };
    let curl = rendered(Protocol::Rest, Language::Curl, &sample_form(), &deployment);
    assert!(curl
        .producer
        .contains("'http://broker.example.com:4444/stations/orders/produce/single'"));
    let go = rendered(Protocol::Sdk, Language::Go, &sample_form(), &deployment);
    assert!(go.producer.contains("\"broker.example.com\""));
}

#[test]
fn test_python_top_level_spacing_survives() {
    let deployment = DeploymentConfig::default();
    for use_headers in [false, true] {
        let form = FormState {
            use_headers,
            headers: vec![HeaderEntry::new("a", "b")],
            ..sample_form()
        };
        let python = rendered(Protocol::Sdk, Language::Python, &form, &deployment);
        for (role, text) in python.roles() {
            assert!(
                text.contains("\n\n\nasync def main"),
                "headers={use_headers} {role}:\n{text}"
            );
            assert!(
                text.contains("\n\n\nif __name__ == \"__main__\":"),
                "headers={use_headers} {role}:\n{text}"
            );
        }
    }
}

#[test]
fn test_header_value_is_not_filled() {
    let form = FormState {
        password: "s3cret".into(),
        use_headers: true,
        headers: vec![HeaderEntry::new("x-note", "<password>")],
        ..sample_form()
    };
    let deployment = DeploymentConfig {
        auth_mode: AuthMode::Password,
        ..DeploymentConfig::default()
    };
    let curl = rendered(Protocol::Rest, Language::Curl, &form, &deployment);
    assert!(
        curl.producer.contains("--header 'x-note: <password>' \\"),
        "{}",
        curl.producer
    );
    assert!(!curl.producer.contains("s3cret"));
}

#[test]
fn test_free_text_values_are_escaped() {
    let form = FormState {
        username: "o\"brien".into(),
        station_name: "it's".into(),
        ..sample_form()
    };
    let deployment = DeploymentConfig::default();

    let go = rendered(Protocol::Sdk, Language::Go, &form, &deployment);
    assert!(go.producer.contains("\"o\\\"brien\""), "{}", go.producer);
    assert!(go.producer.contains("\"it's\""));

    let curl = rendered(Protocol::Rest, Language::Curl, &form, &deployment);
    let token = curl.token_generate.as_deref().unwrap();
    assert!(token.contains("\"username\": \"o\\\"brien\""), "{token}");
}
