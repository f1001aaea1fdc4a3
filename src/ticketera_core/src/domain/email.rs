use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Email address value object.
///
/// Parsing normalizes the address to lowercase, so every comparison and
/// store lookup sees the same canonical form.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = value.expose_secret().trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(Secret::from(normalized)))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized_to_lowercase() {
        let email = Email::try_from(Secret::from("Alice@Example.COM".to_string())).unwrap();
        assert_eq!(email.as_ref().expose_secret(), "alice@example.com");
    }

    #[test]
    fn test_equal_emails_differing_in_case_compare_equal() {
        let lower = Email::try_from(Secret::from("a@x.com".to_string())).unwrap();
        let upper = Email::try_from(Secret::from("A@X.com".to_string())).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let result = Email::try_from(Secret::from(String::new()));
        assert!(matches!(result, Err(UserError::InvalidEmail)));
    }

    #[test]
    fn test_email_without_at_sign_is_rejected() {
        let result = Email::try_from(Secret::from("not-an-email".to_string()));
        assert!(matches!(result, Err(UserError::InvalidEmail)));
    }
}
