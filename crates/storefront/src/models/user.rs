//! Signed-in user.

use dripstore_core::UserId;

/// Avatar assigned to every simulated account.
pub const DEFAULT_AVATAR: &str =
    "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg";

/// The currently signed-in user (domain type).
///
/// Lives only in memory; a restart signs everyone out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Session-scoped user ID.
    pub id: UserId,
    /// Email as entered at login or signup.
    pub email: String,
    /// Name shown in the profile header.
    pub display_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl AuthUser {
    /// Build a user from an email, preferring an explicit non-blank name.
    ///
    /// Without a name, the part of the email before `@` is used.
    #[must_use]
    pub fn from_email(email: &str, name: Option<&str>) -> Self {
        let display_name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| local_part(email).to_owned(), ToOwned::to_owned);

        Self {
            id: UserId::generate(),
            email: email.to_owned(),
            display_name,
            avatar: DEFAULT_AVATAR.to_owned(),
        }
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        let user = AuthUser::from_email("jade@drip.store", None);
        assert_eq!(user.display_name, "jade");
        assert_eq!(user.email, "jade@drip.store");
        assert_eq!(user.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn test_explicit_name_wins_unless_blank() {
        assert_eq!(
            AuthUser::from_email("a@b.com", Some("Jade")).display_name,
            "Jade"
        );
        assert_eq!(AuthUser::from_email("a@b.com", Some("  ")).display_name, "a");
    }

    #[test]
    fn test_email_without_at_uses_whole_string() {
        assert_eq!(AuthUser::from_email("jade", None).display_name, "jade");
    }
}
