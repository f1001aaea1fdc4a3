use argon2::{
    Algorithm, Argon2, Params, PasswordHash as ArgonPasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use ticketera_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id hasher with a fixed cost profile. Hashing and verification run
/// on the blocking pool so a slow hash never stalls the async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        hash: &PasswordHash,
        candidate: Password,
    ) -> Result<(), PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let expected_hash = hash.as_ref().expose_secret().clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash: ArgonPasswordHash<'_> = ArgonPasswordHash::new(&expected_hash)
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

                hasher()?
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected_hash,
                    )
                    .map_err(|e| match e {
                        argon2::password_hash::Error::Password => {
                            PasswordHasherError::PasswordMismatch
                        }
                        other => PasswordHasherError::UnexpectedError(other.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        result
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordHasherError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?,
    ))
}
