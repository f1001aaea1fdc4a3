use ticketera_core::{
    Email, Password, PasswordHasher, PasswordHasherError, User, UserId, UserStore, UserStoreError,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Register use case - hashes the password and persists a new user.
///
/// The plaintext password goes into the hasher and nowhere else; the store
/// only ever sees the hash.
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
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

    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: String,
        email: Email,
        password: Password,
    ) -> Result<UserId, RegisterError> {
        let password_hash = self.password_hasher.hash(password).await?;
        let user = User::new(name, email, password_hash);
        let user_id = user.id();

        self.user_store.add_user(user).await?;

        Ok(user_id)
    }
}
