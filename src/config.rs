//! Runtime configuration of the fake backend.
//!
//! The only tunables are the artificial latencies of the async fake store.
//! Each one is read from an optional environment variable holding a number
//! of milliseconds; unset variables keep the defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use blog_effects::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Send latency: {:?}", config.latency.net_send);
//! ```

use std::env;
use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

/// Environment variable for [`Latency::cache`].
pub const CACHE_LATENCY_VAR: &str = "BLOG_EFFECTS_CACHE_LATENCY_MS";
/// Environment variable for [`Latency::create_post`].
pub const CREATE_POST_LATENCY_VAR: &str = "BLOG_EFFECTS_CREATE_POST_LATENCY_MS";
/// Environment variable for [`Latency::get_posts`].
pub const GET_POSTS_LATENCY_VAR: &str = "BLOG_EFFECTS_GET_POSTS_LATENCY_MS";
/// Environment variable for [`Latency::update_post`].
pub const UPDATE_POST_LATENCY_VAR: &str = "BLOG_EFFECTS_UPDATE_POST_LATENCY_MS";
/// Environment variable for [`Latency::net_send`].
pub const NET_SEND_LATENCY_VAR: &str = "BLOG_EFFECTS_NET_SEND_LATENCY_MS";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// How long each operation of the fake backend takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Every cache operation.
    pub cache: Duration,
    /// Storing a new post.
    pub create_post: Duration,
    /// Listing a user's posts.
    pub get_posts: Duration,
    /// Changing a post.
    pub update_post: Duration,
    /// Delivering a payload.
    pub net_send: Duration,
}

impl Latency {
    /// No delay anywhere.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            cache: Duration::ZERO,
            create_post: Duration::ZERO,
            get_posts: Duration::ZERO,
            update_post: Duration::ZERO,
            net_send: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            cache: Duration::ZERO,
            create_post: Duration::from_millis(150),
            get_posts: Duration::from_millis(400),
            update_post: Duration::from_millis(200),
            net_send: Duration::from_millis(1500),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Latencies of the fake backend.
    pub latency: Latency,
}

impl AppConfig {
    /// Loads configuration from the environment, after reading `.env` if
    /// one exists.
    ///
    /// # Environment Variables
    ///
    /// All optional, in milliseconds:
    ///
    /// - `BLOG_EFFECTS_CACHE_LATENCY_MS` (default: 0)
    /// - `BLOG_EFFECTS_CREATE_POST_LATENCY_MS` (default: 150)
    /// - `BLOG_EFFECTS_GET_POSTS_LATENCY_MS` (default: 400)
    /// - `BLOG_EFFECTS_UPDATE_POST_LATENCY_MS` (default: 200)
    /// - `BLOG_EFFECTS_NET_SEND_LATENCY_MS` (default: 1500)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but is not a
    /// whole number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is present but is
    /// not a whole number of milliseconds.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Latency::default();
        let latency = Latency {
            cache: get_optional_millis(&lookup, CACHE_LATENCY_VAR, defaults.cache)?,
            create_post: get_optional_millis(
                &lookup,
                CREATE_POST_LATENCY_VAR,
                defaults.create_post,
            )?,
            get_posts: get_optional_millis(&lookup, GET_POSTS_LATENCY_VAR, defaults.get_posts)?,
            update_post: get_optional_millis(
                &lookup,
                UPDATE_POST_LATENCY_VAR,
                defaults.update_post,
            )?,
            net_send: get_optional_millis(&lookup, NET_SEND_LATENCY_VAR, defaults.net_send)?,
        };
        Ok(Self { latency })
    }
}

/// Reads a millisecond count, falling back to `default` when unset.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the value cannot be parsed.
fn get_optional_millis<L>(lookup: &L, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}
