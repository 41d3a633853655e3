//! Per-language syntax used by the substitution pipeline.
//!
//! A [`LanguageProfile`] answers the questions that differ between
//! languages: how a custom header is written, how it reaches the produce
//! call, how async produce is requested and what the account-id clause
//! looks like. Adding a language means adding a profile here and templates
//! in the catalog; the pipeline itself does not branch on language.

use crate::catalog::{Language, Protocol};
use crate::engine::Separator;
use crate::form::HeaderEntry;

/// How custom headers are written for a language
#[derive(Debug, Clone, Copy)]
pub struct HeaderSyntax {
    /// Lines substituted for `<headers-declaration>`; may contain `<headers-addition>`
    pub declaration: &'static [&'static str],
    /// Renders one header entry
    pub entry: fn(&HeaderEntry) -> String,
    pub separator: Separator,
    /// Text substituted for `<headers-param>` in the produce call
    pub message_param: &'static str,
}

impl HeaderSyntax {
    pub fn render_entries(&self, entries: &[HeaderEntry]) -> Vec<String> {
        entries.iter().map(self.entry).collect()
    }
}

/// Shape of the account-id clause in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountClause {
    /// Clause sits inside a line; this exact text is removed
    Inline(&'static str),
    /// Clause occupies its own line; the line is removed
    Line,
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub headers: HeaderSyntax,
    /// Text substituted for `<producer-async>` when async produce is on
    pub async_produce: Option<&'static str>,
    pub account_clause: AccountClause,
    /// Escapes a user value for the string literal it lands in
    pub literal: fn(&str) -> String,
}

/// Escape for a double-quoted string literal
fn dq(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape for a single-quoted shell argument
fn sq(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// Escape for a JSON string inside a single-quoted shell argument
fn shell_dq(s: &str) -> String {
    sq(&dq(s))
}

fn go_sdk_entry(h: &HeaderEntry) -> String {
    format!(
        "hdrs.Add(\"{}\", \"{}\")",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

fn python_sdk_entry(h: &HeaderEntry) -> String {
    format!(
        "headers.add(\"{}\", \"{}\")",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

fn node_sdk_entry(h: &HeaderEntry) -> String {
    format!(
        "headers.add(\"{}\", \"{}\");",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

fn dotnet_sdk_entry(h: &HeaderEntry) -> String {
    format!(
        "commonHeaders.Add(\"{}\", \"{}\");",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

fn curl_entry(h: &HeaderEntry) -> String {
    format!(
        "--header '{}: {}' \\",
        sq(h.key_or_placeholder()),
        sq(h.value_or_placeholder())
    )
}

fn go_rest_entry(h: &HeaderEntry) -> String {
    format!(
        "req.Header.Set(\"{}\", \"{}\")",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

/// Key/value pair inside an object or dict literal
fn object_entry(h: &HeaderEntry) -> String {
    format!(
        "\"{}\": \"{}\",",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

fn java_entry(h: &HeaderEntry) -> String {
    format!(
        ".header(\"{}\", \"{}\")",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

fn fetch_entry(h: &HeaderEntry) -> String {
    format!(
        "myHeaders.append(\"{}\", \"{}\");",
        dq(h.key_or_placeholder()),
        dq(h.value_or_placeholder())
    )
}

const GO_SDK: LanguageProfile = LanguageProfile {
    headers: HeaderSyntax {
        declaration: &["hdrs := memphis.Headers{}", "hdrs.New()", "<headers-addition>"],
        entry: go_sdk_entry,
        separator: Separator::Lines,
        message_param: ", memphis.MsgHeaders(hdrs)",
    },
    async_produce: Some(", memphis.AsyncProduce()"),
    account_clause: AccountClause::Inline(", memphis.AccountId(<account-id>)"),
    literal: dq,
};

const NODE_SDK: LanguageProfile = LanguageProfile {
    headers: HeaderSyntax {
        declaration: &["const headers = memphis.headers();", "<headers-addition>"],
        entry: node_sdk_entry,
        separator: Separator::Lines,
        message_param: ", headers: headers",
    },
    async_produce: Some(", asyncProduce: true"),
    account_clause: AccountClause::Line,
    literal: dq,
};

const PYTHON_SDK: LanguageProfile = LanguageProfile {
    headers: HeaderSyntax {
        declaration: &["headers = Headers()", "<headers-addition>"],
        entry: python_sdk_entry,
        separator: Separator::Lines,
        message_param: ", headers=headers",
    },
    async_produce: None,
    account_clause: AccountClause::Inline(", account_id=<account-id>"),
    literal: dq,
};

const DOTNET_SDK: LanguageProfile = LanguageProfile {
    headers: HeaderSyntax {
        declaration: &[
            "var commonHeaders = new NameValueCollection();",
            "<headers-addition>",
        ],
        entry: dotnet_sdk_entry,
        separator: Separator::Lines,
        message_param: ", commonHeaders",
    },
    async_produce: Some(", asyncProduce: true"),
    account_clause: AccountClause::Line,
    literal: dq,
};

const fn rest(
    entry: fn(&HeaderEntry) -> String,
    literal: fn(&str) -> String,
) -> LanguageProfile {
    LanguageProfile {
        headers: HeaderSyntax {
            declaration: &[],
            entry,
            separator: Separator::Lines,
            message_param: "",
        },
        async_produce: None,
        account_clause: AccountClause::Line,
        literal,
    }
}

const CURL_REST: LanguageProfile = rest(curl_entry, shell_dq);
const GO_REST: LanguageProfile = rest(go_rest_entry, dq);
const OBJECT_REST: LanguageProfile = rest(object_entry, dq);
const JAVA_REST: LanguageProfile = rest(java_entry, dq);
const FETCH_REST: LanguageProfile = rest(fetch_entry, dq);

/// Profile for a (protocol, language) pair
///
/// Documentation-only catalog entries fall back to the closest profile; they
/// are never rendered.
pub fn profile_for(protocol: Protocol, language: Language) -> &'static LanguageProfile {
    match (protocol, language) {
        (Protocol::Sdk, Language::Go) => &GO_SDK,
        (Protocol::Sdk, Language::NodeJs | Language::TypeScript | Language::NestJs) => &NODE_SDK,
        (Protocol::Sdk, Language::Python) => &PYTHON_SDK,
        (Protocol::Sdk, Language::DotNet) => &DOTNET_SDK,
        (Protocol::Sdk, _) => &NODE_SDK,
        (Protocol::Rest, Language::Go) => &GO_REST,
        (Protocol::Rest, Language::NodeJs | Language::Python) => &OBJECT_REST,
        (Protocol::Rest, Language::Java) => &JAVA_REST,
        (Protocol::Rest, Language::JavaScript) => &FETCH_REST,
        (Protocol::Rest, _) => &CURL_REST,
    }
}
