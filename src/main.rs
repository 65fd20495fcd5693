//! Blog Effects Demo Entry Point
//!
//! Runs the three blog workflows through both encodings against a seeded,
//! logging fake store, so the operation logs of the two can be compared.

use blog_effects::config::AppConfig;
use blog_effects::domain::samples::{cool_post, john};
use blog_effects::domain::{PostId, PostUpdate};
use blog_effects::interpreter::{FakeInterpreter, Logging};
use blog_effects::{free, tagless};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_effects=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded: latency={:?}", config.latency);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let update = PostUpdate::from_post(&cool_post());

    tracing::info!("=== Free monad encoding ===");
    let interpreter = Logging::new(FakeInterpreter::seeded(config.latency));

    tracing::info!("review_posts");
    free::review_posts(john().id).interpret(&interpreter).await;
    tracing::info!("create_and_notify");
    free::create_and_notify(cool_post())
        .interpret(&interpreter)
        .await;
    tracing::info!("update_and_invalidate");
    let updated = free::update_and_invalidate(PostId::FIRST, update.clone())
        .interpret(&interpreter)
        .await;
    tracing::info!("Updated post: {updated:?}");

    tracing::info!("=== Tagless final encoding ===");
    let interpreter = Logging::new(FakeInterpreter::seeded(config.latency));

    tracing::info!("review_posts");
    tagless::review_posts(&interpreter, john().id).await;
    tracing::info!("create_and_notify");
    tagless::create_and_notify(&interpreter, cool_post()).await;
    tracing::info!("update_and_invalidate");
    let updated = tagless::update_and_invalidate(&interpreter, PostId::FIRST, update).await;
    tracing::info!("Updated post: {updated:?}");

    let final_state = interpreter.inner().snapshot();
    tracing::info!(
        "Final store: {} posts, {} cache entries",
        final_state.database.len(),
        final_state.cache.len()
    );
}
