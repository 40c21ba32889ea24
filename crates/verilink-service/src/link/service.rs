//! Verification link service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use verilink_auth::token::{TokenCodec, VerifyFields, VerifyOutcome};
use verilink_auth::url::VerifyUrlBuilder;
use verilink_cache::ShortLinkStoreManager;
use verilink_core::config::AppConfig;
use verilink_core::config::shortlink::ShortLinkConfig;
use verilink_core::error::AppError;
use verilink_core::result::AppResult;
use verilink_core::traits::ShortLinkStore;

use super::code::CodeGenerator;

/// Everything handed back when a link is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedLink {
    /// Signed token.
    pub token: String,
    /// Long verification URL.
    pub verify_url: String,
    /// Short URL, when one was requested and short links are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

/// Issues verification links and resolves short codes.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Token codec holding the signing key.
    codec: Arc<TokenCodec>,
    /// Long/short URL builder.
    urls: VerifyUrlBuilder,
    /// Short-link store; `None` while short links are disabled.
    store: Option<Arc<dyn ShortLinkStore>>,
    /// Short-code generator.
    codes: CodeGenerator,
    /// Short-link settings.
    config: ShortLinkConfig,
}

impl LinkService {
    /// Creates a link service from its parts.
    ///
    /// `store` is ignored when short links are disabled in `config`.
    pub fn new(
        codec: Arc<TokenCodec>,
        urls: VerifyUrlBuilder,
        store: Option<Arc<dyn ShortLinkStore>>,
        config: ShortLinkConfig,
    ) -> Self {
        let store = if config.enabled { store } else { None };
        Self {
            codec,
            urls,
            store,
            codes: CodeGenerator::new(config.code_length),
            config,
        }
    }

    /// Wires the codec and, when enabled, the configured store backend.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let codec = Arc::new(TokenCodec::new(&config.verify)?);
        let urls = VerifyUrlBuilder::new(&config.verify);

        let store: Option<Arc<dyn ShortLinkStore>> = if config.shortlink.enabled {
            let manager = ShortLinkStoreManager::new(&config.shortlink).await?;
            Some(Arc::new(manager))
        } else {
            info!("Short links disabled");
            None
        };

        Ok(Self::new(codec, urls, store, config.shortlink.clone()))
    }

    /// The token codec.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Whether short links are being issued.
    pub fn short_links_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// URL path prefix under which short codes are served.
    pub fn public_prefix(&self) -> &str {
        &self.config.public_prefix
    }

    /// The URL builder.
    pub fn urls(&self) -> &VerifyUrlBuilder {
        &self.urls
    }

    /// Builds a signed token.
    pub fn build_token(&self, fields: &VerifyFields) -> AppResult<String> {
        self.codec.build_token(fields)
    }

    /// Verifies a token.
    pub fn verify_token(&self, token: &str) -> VerifyOutcome {
        self.codec.verify_token(token)
    }

    /// Builds a long verification URL: `<base>/verify?t=<token>`.
    pub fn build_verify_url(&self, fields: &VerifyFields) -> AppResult<String> {
        let token = self.build_token(fields)?;
        Ok(self.urls.verify_url(&token))
    }

    /// Builds a short verification URL: `<base><prefix>/<code>`.
    ///
    /// With short links disabled this returns the long URL, or a
    /// `FeatureDisabled` error when the long-URL fallback is turned off.
    pub async fn build_short_verify_url(&self, fields: &VerifyFields) -> AppResult<String> {
        let token = self.build_token(fields)?;
        match &self.store {
            Some(store) => {
                let code = self.register(store.as_ref(), &token).await?;
                Ok(self.urls.short_url(&self.config.public_prefix, &code))
            }
            None => self.fallback_url(&token),
        }
    }

    /// Issues a token, its long URL and optionally a short URL.
    pub async fn issue(&self, fields: &VerifyFields, short: bool) -> AppResult<IssuedLink> {
        let token = self.build_token(fields)?;
        let verify_url = self.urls.verify_url(&token);

        let short_url = match (&self.store, short) {
            (Some(store), true) => {
                let code = self.register(store.as_ref(), &token).await?;
                Some(self.urls.short_url(&self.config.public_prefix, &code))
            }
            (None, true) => {
                self.fallback_url(&token)?;
                None
            }
            (_, false) => None,
        };

        Ok(IssuedLink {
            token,
            verify_url,
            short_url,
        })
    }

    /// Looks up the token behind a short code.
    ///
    /// Does not verify the token. Returns `None` for unknown or malformed
    /// codes and while short links are disabled.
    pub async fn resolve_code(&self, code: &str) -> AppResult<Option<String>> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        if !self.codes.is_well_formed(code) {
            debug!(code_len = code.len(), "Ignoring malformed short code");
            return Ok(None);
        }
        store.get(code).await
    }

    /// Resolves a short code and verifies the token behind it.
    pub async fn resolve_and_verify(&self, code: &str) -> AppResult<Option<VerifyOutcome>> {
        let token = self.resolve_code(code).await?;
        Ok(token.map(|token| self.verify_token(&token)))
    }

    /// Backend name and reachability of the short-link store, if enabled.
    pub async fn store_health(&self) -> Option<(&'static str, bool)> {
        let store = self.store.as_ref()?;
        let healthy = match store.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Short-link store health check failed");
                false
            }
        };
        Some((store.backend(), healthy))
    }

    /// Stores `token` under a fresh code, retrying on collisions.
    async fn register(&self, store: &dyn ShortLinkStore, token: &str) -> AppResult<String> {
        let ttl = self.config.ttl();
        for attempt in 1..=self.config.max_attempts {
            let code = self.codes.generate();
            if store.put(&code, token, ttl).await? {
                info!(code = %code, attempt, backend = store.backend(), "Registered short link");
                return Ok(code);
            }
            warn!(attempt, "Short code collision, retrying");
        }

        Err(AppError::conflict(format!(
            "Could not allocate a unique short code after {} attempts",
            self.config.max_attempts
        )))
    }

    fn fallback_url(&self, token: &str) -> AppResult<String> {
        if self.config.fallback_to_long_url {
            Ok(self.urls.verify_url(token))
        } else {
            Err(AppError::feature_disabled("Short links are disabled"))
        }
    }
}
