use std::sync::Arc;

use userlife::config::AppConfig;
use userlife::logger::TracingLogger;
use userlife::users::dto::UserInput;
use userlife::users::password::Argon2Hasher;
use userlife::users::repo::InMemoryUserStore;
use userlife::users::services::UserLifecycleService;
use userlife::users::validation::ValidationRules;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "userlife=debug".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let service = UserLifecycleService::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(Argon2Hasher),
        Arc::new(TracingLogger),
        ValidationRules {
            password_min_len: config.password_min_len,
        },
    );

    // Smoke pass over the whole lifecycle against the in-memory store.
    let created = service
        .create(UserInput::new("ada@example.com", "correct-horse-battery"))
        .await?;
    let fetched = service.get_by_id(created.id).await?;
    tracing::info!(user_id = %fetched.id, email = %fetched.email, "fetched");

    let patch = UserInput {
        email: Some("ada@lovelace.dev".to_string()),
        ..Default::default()
    };
    let updated = service.update_by_id(created.id, patch).await?;
    tracing::info!(user_id = %updated.id, email = %updated.email, "updated");

    let users = service.list_all().await?;
    tracing::info!(count = users.len(), "listing users");

    service.delete_by_id(created.id).await?;
    Ok(())
}
