//! Builds the ordered substitution steps for one render.
//!
//! Step order:
//!
//! 1. `headers-declaration` - expand (introduces `<headers-addition>`) or delete
//! 2. `headers-param` - produce-call argument, cleared when headers are off
//! 3. `producer-async` - async flag, then cleared
//! 4. `account-id` - substitute, or remove the whole clause
//! 5. `auth-*` - password-mode identifier rewrite
//! 6. `headers-addition-remove` - drop the header slot when headers are off
//! 7. `fill-values` - header entries, host, names, JWT, numbers and the
//!    credential, all in one pass
//!
//! Steps 1-6 only touch template structure. User-supplied text enters at
//! step 7 and is never rescanned, so neither the auth rewrite nor another
//! field's substitution can alter a user value.

use tracing::debug;

use crate::catalog::Protocol;
use crate::engine::{Action, Fill, Guard, RenderContext, Separator, Step};
use crate::form::{non_blank, numeric_or};
use crate::profile::{profile_for, AccountClause};
use crate::token::Token;

pub const DEFAULT_BATCH_SIZE: u64 = 10;
pub const DEFAULT_BATCH_MAX_WAIT_TIME_MS: u64 = 5000;
pub const DEFAULT_TOKEN_EXPIRY_MINUTES: u64 = 100;
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_MINUTES: u64 = 10_000_092;

/// Build the steps for the render described by `ctx`
pub fn build(ctx: &RenderContext<'_>) -> Vec<Step> {
    let profile = profile_for(ctx.protocol, ctx.language);
    let mut steps = Vec::with_capacity(16);

    // Header scaffolding
    let declaration: Vec<String> = profile
        .headers
        .declaration
        .iter()
        .map(|line| (*line).to_string())
        .collect();
    steps.push(Step::new(
        "headers-declaration",
        Guard::HeadersEnabled,
        Action::ExpandBlock {
            token: Token::HeadersDeclaration,
            fragments: declaration,
            separator: Separator::Lines,
        },
    ));
    steps.push(Step::always(
        "headers-declaration-remove",
        Action::DeleteLines {
            token: Token::HeadersDeclaration,
        },
    ));
    steps.push(Step::new(
        "headers-param",
        Guard::HeadersEnabled,
        Action::replace(Token::HeadersParam, profile.headers.message_param),
    ));
    steps.push(Step::always(
        "headers-param-clear",
        Action::replace(Token::HeadersParam, ""),
    ));

    if let Some(expr) = profile.async_produce {
        steps.push(Step::new(
            "producer-async",
            Guard::AsyncProduce,
            Action::replace(Token::ProducerAsync, expr),
        ));
    }
    steps.push(Step::always(
        "producer-async-clear",
        Action::replace(Token::ProducerAsync, ""),
    ));

    if let Some(account_id) = ctx.deployment.account_id {
        steps.push(Step::new(
            "account-id",
            Guard::AccountIdClause,
            Action::replace(Token::AccountId, account_id.to_string()),
        ));
    }
    steps.push(Step::always(
        "account-id-clause-remove",
        match profile.account_clause {
            AccountClause::Inline(clause) => Action::replace_text(clause, ""),
            AccountClause::Line => Action::DeleteLines {
                token: Token::AccountId,
            },
        },
    ));

    // Credential kind applies to every template regardless of protocol
    for (name, from, to) in [
        ("auth-type-name", "ConnectionToken", "Password"),
        ("auth-camel-name", "connectionToken", "password"),
        ("auth-snake-name", "connection_token", "password"),
        ("auth-placeholder", Token::BrokerToken.as_str(), Token::Password.as_str()),
    ] {
        steps.push(Step::new(
            name,
            Guard::PasswordAuth,
            Action::replace_text(from, to),
        ));
    }

    steps.push(Step::new(
        "headers-addition-remove",
        Guard::HeadersDisabled,
        Action::DeleteLines {
            token: Token::HeadersAddition,
        },
    ));

    steps.push(Step::always(
        "fill-values",
        Action::Fill {
            values: fill_values(ctx),
        },
    ));
    steps
}

/// Every user and deployment value, keyed by the marker it replaces
fn fill_values(ctx: &RenderContext<'_>) -> Vec<(Token, Fill)> {
    let profile = profile_for(ctx.protocol, ctx.language);
    let form = ctx.form;
    let literal = profile.literal;
    let mut values = Vec::with_capacity(Token::ALL.len());

    if form.use_headers {
        values.push((
            Token::HeadersAddition,
            Fill::Block {
                fragments: profile.headers.render_entries(&form.header_entries()),
                separator: profile.headers.separator,
            },
        ));
    }

    // Free text: blank fields keep their placeholder as a fill-in hint
    let station = non_blank(&form.station_name).map(|s| match ctx.protocol {
        Protocol::Rest => urlencoding::encode(s).into_owned(),
        Protocol::Sdk => s.to_string(),
    });
    let text_fields = [
        ("memphis-host", Token::MemphisHost, Some(ctx.deployment.host_for(ctx.protocol))),
        ("username", Token::Username, non_blank(&form.username).map(str::to_string)),
        ("station-name", Token::StationName, station),
        ("producer-name", Token::ProducerName, non_blank(&form.producer_name).map(str::to_string)),
        ("consumer-name", Token::ConsumerName, non_blank(&form.consumer_name).map(str::to_string)),
        ("consumer-group", Token::ConsumerGroup, non_blank(&form.consumer_group).map(str::to_string)),
        ("jwt-token", Token::JwtToken, non_blank(&form.jwt_token).map(str::to_string)),
    ];
    for (name, token, value) in text_fields {
        match value {
            Some(value) => values.push((token, Fill::Text(literal(&value)))),
            None => debug!(field = name, "form field empty, keeping placeholder"),
        }
    }

    let numeric_fields = [
        ("batch-size", Token::BatchSize, &form.batch_size, DEFAULT_BATCH_SIZE),
        (
            "batch-max-wait-time",
            Token::BatchMaxWaitTimeMs,
            &form.batch_max_wait_time_ms,
            DEFAULT_BATCH_MAX_WAIT_TIME_MS,
        ),
        ("token-expiry", Token::TokenExpiry, &form.token_expiry, DEFAULT_TOKEN_EXPIRY_MINUTES),
        (
            "refresh-token-expiry",
            Token::RefreshTokenExpiry,
            &form.refresh_token_expiry,
            DEFAULT_REFRESH_TOKEN_EXPIRY_MINUTES,
        ),
    ];
    for (name, token, raw, default) in numeric_fields {
        let value = numeric_or(raw, default);
        if value == default && raw.trim() != default.to_string() {
            debug!(field = name, raw = %raw, default, "using default for numeric field");
        }
        values.push((token, Fill::Text(value.to_string())));
    }

    if let Some(credential) = non_blank(&form.password) {
        let credential = literal(credential);
        values.push((Token::BrokerToken, Fill::Text(credential.clone())));
        values.push((Token::Password, Fill::Text(credential)));
    }
    values
}
