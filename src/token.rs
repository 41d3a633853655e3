//! Placeholder tokens recognised inside snippet templates.

use std::fmt;

/// A placeholder marker embedded in a template.
///
/// Every marker the renderer knows about is listed here; the linter uses
/// [`Token::ALL`] to detect markers that survived a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Broker host (SDK) or REST gateway base URL (REST)
    MemphisHost,
    Username,
    /// Connection token credential
    BrokerToken,
    /// Password credential, introduced by the password auth rewrite
    Password,
    StationName,
    ProducerName,
    ConsumerName,
    ConsumerGroup,
    AccountId,
    BatchSize,
    BatchMaxWaitTimeMs,
    TokenExpiry,
    RefreshTokenExpiry,
    JwtToken,
    HeadersDeclaration,
    HeadersAddition,
    HeadersParam,
    ProducerAsync,
    HeaderKey,
    HeaderValue,
}

impl Token {
    pub const ALL: [Token; 20] = [
        Token::MemphisHost,
        Token::Username,
        Token::BrokerToken,
        Token::Password,
        Token::StationName,
        Token::ProducerName,
        Token::ConsumerName,
        Token::ConsumerGroup,
        Token::AccountId,
        Token::BatchSize,
        Token::BatchMaxWaitTimeMs,
        Token::TokenExpiry,
        Token::RefreshTokenExpiry,
        Token::JwtToken,
        Token::HeadersDeclaration,
        Token::HeadersAddition,
        Token::HeadersParam,
        Token::ProducerAsync,
        Token::HeaderKey,
        Token::HeaderValue,
    ];

    /// The literal marker text, angle brackets included.
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::MemphisHost => "<memphis-host>",
            Token::Username => "<application type username>",
            Token::BrokerToken => "<broker-token>",
            Token::Password => "<password>",
            Token::StationName => "<station-name>",
            Token::ProducerName => "<producer-name>",
            Token::ConsumerName => "<consumer-name>",
            Token::ConsumerGroup => "<consumer-group>",
            Token::AccountId => "<account-id>",
            Token::BatchSize => "<batch-size>",
            Token::BatchMaxWaitTimeMs => "<batch-max-wait-time-ms>",
            Token::TokenExpiry => "<token-expiry>",
            Token::RefreshTokenExpiry => "<refresh-token-expiry>",
            Token::JwtToken => "<jwt-token>",
            Token::HeadersDeclaration => "<headers-declaration>",
            Token::HeadersAddition => "<headers-addition>",
            Token::HeadersParam => "<headers-param>",
            Token::ProducerAsync => "<producer-async>",
            Token::HeaderKey => "<key>",
            Token::HeaderValue => "<value>",
        }
    }

    /// Find the token whose marker text is exactly `marker`.
    pub fn from_marker(marker: &str) -> Option<Token> {
        Token::ALL.iter().copied().find(|t| t.as_str() == marker)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_markers_are_unique_and_bracketed() {
        let mut seen = HashSet::new();
        for token in Token::ALL {
            let marker = token.as_str();
            assert!(marker.starts_with('<') && marker.ends_with('>'), "{marker}");
            assert!(seen.insert(marker), "duplicate marker {marker}");
        }
    }

    #[test]
    fn test_from_marker() {
        assert_eq!(Token::from_marker("<account-id>"), Some(Token::AccountId));
        assert_eq!(
            Token::from_marker("<application type username>"),
            Some(Token::Username)
        );
        assert_eq!(Token::from_marker("<String>"), None);
    }
}
