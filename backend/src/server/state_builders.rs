//! Builders selecting storage adapters and wiring the HTTP state.

use std::sync::Arc;

use mockable::Clock;
use tracing::{info, warn};

use blog_backend::domain::ports::{CredentialHasher, TokenService, UserAccountRepository};
use blog_backend::domain::{AccountService, ContentService, ContentStore};
use blog_backend::inbound::http::state::HttpState;
use blog_backend::outbound::memory::MemoryStore;
use blog_backend::outbound::persistence::{
    DbPool, DieselCategoryRepository, DieselCommentRepository, DieselPostRepository,
    DieselReplyRepository, DieselUserAccountRepository, PoolConfig, run_pending_migrations,
};
use blog_backend::outbound::security::Argon2CredentialHasher;

use super::config::BlogSettings;

/// Driven adapters behind the domain services.
pub(crate) struct StorageAdapters {
    pub(crate) content: ContentStore,
    pub(crate) accounts: Arc<dyn UserAccountRepository>,
}

impl StorageAdapters {
    pub(crate) fn in_memory() -> Self {
        let store = MemoryStore::shared();
        Self {
            content: store.content_store(),
            accounts: store,
        }
    }

    pub(crate) fn diesel(pool: &DbPool) -> Self {
        Self {
            content: ContentStore::new(
                Arc::new(DieselPostRepository::new(pool.clone())),
                Arc::new(DieselCategoryRepository::new(pool.clone())),
                Arc::new(DieselCommentRepository::new(pool.clone())),
                Arc::new(DieselReplyRepository::new(pool.clone())),
            ),
            accounts: Arc::new(DieselUserAccountRepository::new(pool.clone())),
        }
    }
}

/// Connect to PostgreSQL when configured, otherwise fall back to the
/// in-memory store.
///
/// # Errors
/// Returns an error when migrations or the pool fail to initialise.
pub(crate) async fn build_storage(settings: &BlogSettings) -> std::io::Result<StorageAdapters> {
    let Some(url) = settings.database_url.as_deref() else {
        warn!("BLOG_DATABASE_URL not set; using the in-memory store");
        return Ok(StorageAdapters::in_memory());
    };
    if settings.run_migrations {
        let applied = run_pending_migrations(url)
            .await
            .map_err(|err| std::io::Error::other(format!("migrations failed: {err}")))?;
        info!(applied, "database migrations applied");
    }
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.database_pool_size()))
        .await
        .map_err(|err| std::io::Error::other(format!("database pool failed: {err}")))?;
    Ok(StorageAdapters::diesel(&pool))
}

/// Wire domain services over the adapters into handler state.
pub(crate) fn build_http_state(
    adapters: StorageAdapters,
    tokens: Arc<dyn TokenService>,
    clock: Arc<dyn Clock>,
) -> HttpState {
    let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2CredentialHasher);
    let content = Arc::new(ContentService::new(adapters.content, Arc::clone(&clock)));
    let accounts = Arc::new(AccountService::new(
        adapters.accounts,
        hasher,
        Arc::clone(&tokens),
        clock,
    ));
    HttpState::new(content, accounts, tokens)
}
