//! In-memory profile store.
//!
//! Holds at most one seeded tenant document. Exists for local development
//! and tests, where no MongoDB deployment is available, and can simulate a
//! store outage so the fail-soft page path is exercisable end to end.
//! Not durable; state is fixed at construction (the lookup path is
//! read-only, so there is nothing to mutate).

use async_trait::async_trait;
use mongodb::bson::Document;

use super::{ProfileLookup, ProfileStore};
use crate::profile::project_profile;

/// Fixed-content store for development and tests.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    document: Option<Document>,
    outage: Option<String>,
}

impl MemoryProfileStore {
    /// Store with no tenant document; every fetch is `NotFound`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store seeded with one tenant document.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
            outage: None,
        }
    }

    /// Store that reports the given cause as `Unavailable` on every fetch.
    pub fn with_outage(cause: impl Into<String>) -> Self {
        Self {
            document: None,
            outage: Some(cause.into()),
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn fetch(&self) -> ProfileLookup {
        if let Some(cause) = &self.outage {
            return ProfileLookup::Unavailable(cause.clone());
        }

        match project_profile(self.document.clone()) {
            Some(profile) => ProfileLookup::Found(profile),
            None => ProfileLookup::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let store = MemoryProfileStore::empty();
        assert_eq!(store.fetch().await, ProfileLookup::NotFound);
    }

    #[tokio::test]
    async fn seeded_store_projects_the_document() {
        let store = MemoryProfileStore::with_document(doc! {
            "name": "Dan Turnbull",
            "telephone": "07700 900123",
            "addressOne": "1 High Street",
            "companyName": "Turnbull Landscaping",
            "email": "dan@example.com",
        });

        match store.fetch().await {
            ProfileLookup::Found(profile) => assert_eq!(profile.name, "Dan Turnbull"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn outage_store_is_unavailable() {
        let store = MemoryProfileStore::with_outage("simulated outage");
        assert_eq!(
            store.fetch().await,
            ProfileLookup::Unavailable("simulated outage".to_string())
        );
    }
}
