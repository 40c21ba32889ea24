//! Verification URL construction and parsing.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use verilink_core::config::verify::VerifyConfig;

/// Path of the public verification endpoint.
pub const VERIFY_PATH: &str = "/verify";

/// Query parameter carrying the token.
pub const TOKEN_PARAM: &str = "t";

/// Characters escaped in a query value; RFC 3986 unreserved marks pass through.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds public verification links from the configured base URL.
#[derive(Debug, Clone)]
pub struct VerifyUrlBuilder {
    base_url: String,
}

impl VerifyUrlBuilder {
    /// Creates a builder from verification configuration.
    pub fn new(config: &VerifyConfig) -> Self {
        Self::from_base_url(&config.base_url)
    }

    /// Creates a builder from a base URL; a trailing `/` is ignored.
    pub fn from_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/verify?t=<token>`
    pub fn verify_url(&self, token: &str) -> String {
        format!(
            "{}{VERIFY_PATH}?{TOKEN_PARAM}={}",
            self.base_url,
            utf8_percent_encode(token, QUERY_VALUE)
        )
    }

    /// `<base><prefix>/<code>`
    pub fn short_url(&self, public_prefix: &str, code: &str) -> String {
        format!("{}{public_prefix}/{code}", self.base_url)
    }
}

/// Extracts the token from a verification link, or returns the input when
/// it is already a bare token.
pub fn token_from_link(input: &str) -> String {
    let input = input.trim();
    let Some((_, query)) = input.split_once('?') else {
        return input.to_string();
    };

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == TOKEN_PARAM)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}
