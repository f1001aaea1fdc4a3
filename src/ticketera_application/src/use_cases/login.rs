use ticketera_core::{
    Email, Password, PasswordHasher, PasswordHasherError, UserId, UserStore, UserStoreError,
};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password collapse into this single variant
    /// before anything reaches the HTTP layer, so the two failures are
    /// indistinguishable to a client.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(PasswordHasherError),
}

/// Login use case - looks up the user and verifies the password.
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<UserId, LoginError> {
        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(LoginError::UserStoreError(e)),
        };

        match self
            .password_hasher
            .verify(user.password_hash(), password)
            .await
        {
            Ok(()) => Ok(user.id()),
            Err(PasswordHasherError::PasswordMismatch) => Err(LoginError::InvalidCredentials),
            Err(e) => Err(LoginError::PasswordHasherError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};
    use ticketera_core::{PasswordHash, User};

    // Mock store holding a single user
    #[derive(Clone)]
    struct MockUserStore {
        user: User,
    }

    #[async_trait::async_trait]
    impl UserStore for MockUserStore {
        async fn add_user(&self, _user: User) -> Result<(), UserStoreError> {
            unimplemented!()
        }

        async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
            if email == self.user.email() {
                Ok(self.user.clone())
            } else {
                Err(UserStoreError::UserNotFound)
            }
        }
    }

    // Mock hasher matching the "hashed:<plaintext>" convention
    #[derive(Clone)]
    struct MockPasswordHasher;

    #[async_trait::async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash(&self, _password: Password) -> Result<PasswordHash, PasswordHasherError> {
            unimplemented!()
        }

        async fn verify(
            &self,
            hash: &PasswordHash,
            candidate: Password,
        ) -> Result<(), PasswordHasherError> {
            let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
            if hash.as_ref().expose_secret() == &expected {
                Ok(())
            } else {
                Err(PasswordHasherError::PasswordMismatch)
            }
        }
    }

    fn store_with_user(email: &str, password: &str) -> MockUserStore {
        let email = Email::try_from(Secret::from(email.to_string())).unwrap();
        let hash = PasswordHash::new(Secret::from(format!("hashed:{password}")));
        MockUserStore {
            user: User::new("Test".to_string(), email, hash),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let user_store = store_with_user("test@example.com", "password123");
        let use_case = LoginUseCase::new(&user_store, &MockPasswordHasher);

        let email = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let password = Password::try_from(Secret::from("password123".to_string())).unwrap();

        let result = use_case.execute(email, password).await.unwrap();
        assert_eq!(result, user_store.user.id());
    }

    #[tokio::test]
    async fn test_login_with_uppercased_email_succeeds() {
        let user_store = store_with_user("test@example.com", "password123");
        let use_case = LoginUseCase::new(&user_store, &MockPasswordHasher);

        let email = Email::try_from(Secret::from("TEST@Example.com".to_string())).unwrap();
        let password = Password::try_from(Secret::from("password123".to_string())).unwrap();

        assert!(use_case.execute(email, password).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let user_store = store_with_user("test@example.com", "password123");
        let use_case = LoginUseCase::new(&user_store, &MockPasswordHasher);

        let password = Password::try_from(Secret::from("wrong".to_string())).unwrap();
        let known = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let unknown = Email::try_from(Secret::from("nobody@example.com".to_string())).unwrap();

        let wrong_password = use_case.execute(known, password.clone()).await;
        let unknown_email = use_case.execute(unknown, password).await;

        assert!(matches!(wrong_password, Err(LoginError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(LoginError::InvalidCredentials)));
    }
}
