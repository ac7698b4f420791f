//! Configuration types for the marketing API SDK.
//!
//! This module provides the configuration used to construct HTTP and API
//! clients.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MarketingConfig`]: The configuration struct holding all SDK settings
//! - [`MarketingConfigBuilder`]: A builder for constructing [`MarketingConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! Base URLs are part of the configuration value and passed into each client
//! constructor; there is no process-wide base URL.
//!
//! # Example
//!
//! ```rust
//! use marketing_api::{MarketingConfig, BaseUrl};
//!
//! let config = MarketingConfig::builder()
//!     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.graphql_base_url().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout applied by the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the marketing API SDK.
///
/// # Thread Safety
///
/// `MarketingConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use marketing_api::{MarketingConfig, BaseUrl};
/// use std::time::Duration;
///
/// let config = MarketingConfig::builder()
///     .api_base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .graphql_base_url(BaseUrl::new("https://search.example.com").unwrap())
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone, Debug)]
pub struct MarketingConfig {
    api_base_url: BaseUrl,
    graphql_base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl MarketingConfig {
    /// Creates a new builder for constructing a `MarketingConfig`.
    #[must_use]
    pub fn builder() -> MarketingConfigBuilder {
        MarketingConfigBuilder::new()
    }

    /// Returns the base URL for REST endpoints.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the base URL for the GraphQL endpoint.
    #[must_use]
    pub const fn graphql_base_url(&self) -> &BaseUrl {
        &self.graphql_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify MarketingConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarketingConfig>();
};

/// Builder for constructing [`MarketingConfig`] instances.
///
/// `api_base_url` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `graphql_base_url`: same as `api_base_url`
/// - `user_agent_prefix`: `None`
/// - `timeout`: [`DEFAULT_TIMEOUT`]
#[derive(Debug, Default)]
pub struct MarketingConfigBuilder {
    api_base_url: Option<BaseUrl>,
    graphql_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl MarketingConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the REST API base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the GraphQL base URL.
    #[must_use]
    pub fn graphql_base_url(mut self, url: BaseUrl) -> Self {
        self.graphql_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`MarketingConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_base_url` is not set.
    pub fn build(self) -> Result<MarketingConfig, ConfigError> {
        let api_base_url = self.api_base_url.ok_or(ConfigError::MissingRequiredField {
            field: "api_base_url",
        })?;
        let graphql_base_url = self
            .graphql_base_url
            .unwrap_or_else(|| api_base_url.clone());

        Ok(MarketingConfig {
            api_base_url,
            graphql_base_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
