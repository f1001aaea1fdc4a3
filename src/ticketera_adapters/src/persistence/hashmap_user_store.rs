use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use ticketera_core::{Email, User, UserStore, UserStoreError};

/// In-memory user store for tests and local runs. Keyed by normalized email,
/// which is what makes the uniqueness check case-insensitive.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.get(email).cloned().ok_or(UserStoreError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};
    use ticketera_core::PasswordHash;

    fn user(email: &str) -> User {
        User::new(
            "Test".to_string(),
            Email::try_from(Secret::from(email.to_string())).unwrap(),
            PasswordHash::new(Secret::from("$argon2id$fake".to_string())),
        )
    }

    #[tokio::test]
    async fn test_add_then_find_user() {
        let store = HashMapUserStore::new();
        store.add_user(user("test@example.com")).await.unwrap();

        let email = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let found = store.find_by_email(&email).await.unwrap();
        assert_eq!(found.email().as_ref().expose_secret(), "test@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = HashMapUserStore::new();
        store.add_user(user("test@example.com")).await.unwrap();

        let result = store.add_user(user("TEST@example.com")).await;
        assert_eq!(result, Err(UserStoreError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_find_unknown_email_is_not_found() {
        let store = HashMapUserStore::new();
        let email = Email::try_from(Secret::from("nobody@example.com".to_string())).unwrap();
        let result = store.find_by_email(&email).await;
        assert!(matches!(result, Err(UserStoreError::UserNotFound)));
    }
}
