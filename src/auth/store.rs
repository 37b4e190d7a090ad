//! Profile storage
//!
//! The store is owned by the caller and handed to signup and login, so tests
//! and sessions each get their own.

use log::debug;

use super::profile::UserProfile;

/// Storage seam for registered profiles
pub trait ProfileStore {
    /// Stores `profile`, returning the record it replaced, if any.
    fn save(&mut self, profile: UserProfile) -> Option<UserProfile>;

    /// Looks up a profile by exact email.
    fn find_by_email(&self, email: &str) -> Option<&UserProfile>;

    /// Most recently registered profile.
    fn current(&self) -> Option<&UserProfile>;
}

/// Holds at most one profile; every save overwrites the previous one.
#[derive(Debug, Default)]
pub struct SingleSlotStore {
    slot: Option<UserProfile>,
}

impl SingleSlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for SingleSlotStore {
    fn save(&mut self, profile: UserProfile) -> Option<UserProfile> {
        let previous = self.slot.replace(profile);
        if previous.is_some() {
            debug!("Replacing previously registered profile");
        }
        previous
    }

    fn find_by_email(&self, email: &str) -> Option<&UserProfile> {
        self.slot.as_ref().filter(|profile| profile.email == email)
    }

    fn current(&self) -> Option<&UserProfile> {
        self.slot.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(email: &str) -> UserProfile {
        UserProfile {
            name: "Ada".into(),
            email: email.into(),
            password: "Abc123".into(),
            address: "1 Main St".into(),
            city: "NY".into(),
            country: "US".into(),
            avatar_url: "https://example.com/a.png".into(),
        }
    }

    #[test]
    fn test_empty_store() {
        let store = SingleSlotStore::new();
        assert!(store.current().is_none());
        assert!(store.find_by_email("a@b.com").is_none());
    }

    #[test]
    fn test_save_overwrites_single_slot() {
        let mut store = SingleSlotStore::new();
        assert!(store.save(profile("a@b.com")).is_none());

        let replaced = store.save(profile("c@d.org"));
        assert_eq!(replaced.map(|p| p.email), Some("a@b.com".to_string()));
        assert!(store.find_by_email("a@b.com").is_none());
        assert_eq!(store.current().map(|p| p.email.as_str()), Some("c@d.org"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut store = SingleSlotStore::new();
        store.save(profile("a@b.com"));
        assert!(store.find_by_email("A@B.COM").is_none());
        assert!(store.find_by_email("a@b.com").is_some());
    }
}
