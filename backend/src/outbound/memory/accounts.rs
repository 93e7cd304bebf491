//! Account repository port over [`MemoryStore`].

use async_trait::async_trait;

use crate::domain::UserAccount;
use crate::domain::ports::{UserAccountRepository, UserAccountRepositoryError};

use super::MemoryStore;

#[async_trait]
impl UserAccountRepository for MemoryStore {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserAccountRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .accounts
            .iter()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn insert(&self, account: &UserAccount) -> Result<(), UserAccountRepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.accounts.iter().any(|row| row.email == account.email) {
            return Err(UserAccountRepositoryError::duplicate_email(account.email.clone()));
        }
        tables.accounts.push(account.clone());
        Ok(())
    }
}
