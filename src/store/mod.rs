//! Profile lookup boundary
//!
//! The lookup returns a tagged [`ProfileLookup`] rather than a `Result`, so
//! the render layer's fallback behavior is an explicit branch instead of a
//! caught error swallowing distinct failure modes. A broken data layer must
//! never prevent the marketing page from being served.

pub mod memory;

pub use memory::MemoryProfileStore;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Client;
use tokio::sync::OnceCell;

use crate::config::StoreConfig;
use crate::profile::{project_profile, TenantProfile};

/// Collection holding the tenant documents.
pub const TENANT_COLLECTION: &str = "tradesmen";

/// Outcome of the single-document tenant lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    /// The configured document exists and projected cleanly.
    Found(TenantProfile),
    /// The id is well-formed but no document carries it.
    NotFound,
    /// The store could not be consulted: malformed configured id, connect
    /// failure, or fetch failure. The cause is for logs only; callers render
    /// the same placeholder as `NotFound`.
    Unavailable(String),
}

impl ProfileLookup {
    /// Collapse the fail-soft arms into the shape the renderer consumes.
    pub fn into_profile(self) -> Option<TenantProfile> {
        match self {
            ProfileLookup::Found(profile) => Some(profile),
            ProfileLookup::NotFound | ProfileLookup::Unavailable(_) => None,
        }
    }
}

/// Read-only source of the one tenant profile.
///
/// The document id is injected at construction, never taken per-request.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch and project the configured tenant document. Must not panic and
    /// must not return transport errors; every failure mode maps to a
    /// [`ProfileLookup`] arm.
    async fn fetch(&self) -> ProfileLookup;
}

/// MongoDB-backed profile store.
///
/// The client is built lazily on first fetch and reused afterwards; driver
/// connection pooling is an external concern.
pub struct MongoProfileStore {
    config: StoreConfig,
    client: OnceCell<Client>,
}

impl MongoProfileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&Client, mongodb::error::Error> {
        self.client
            .get_or_try_init(|| Client::with_uri_str(&self.config.uri))
            .await
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn fetch(&self) -> ProfileLookup {
        // Fail fast on a malformed configured id: no connection is attempted.
        let id = match ObjectId::parse_str(&self.config.tenant_id) {
            Ok(id) => id,
            Err(err) => {
                return ProfileLookup::Unavailable(format!(
                    "invalid tenant id {:?}: {err}",
                    self.config.tenant_id
                ))
            }
        };

        let client = match self.client().await {
            Ok(client) => client,
            Err(err) => return ProfileLookup::Unavailable(format!("connect failed: {err}")),
        };

        let collection = client
            .database(&self.config.database)
            .collection::<Document>(TENANT_COLLECTION);

        match collection.find_one(doc! { "_id": id }, None).await {
            Ok(document @ Some(_)) => match project_profile(document) {
                Some(profile) => ProfileLookup::Found(profile),
                None => ProfileLookup::NotFound,
            },
            Ok(None) => ProfileLookup::NotFound,
            Err(err) => ProfileLookup::Unavailable(format!("fetch failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_tenant_id_is_unavailable_without_connecting() {
        // An unresolvable URI would fail the connect; the id check must
        // short-circuit before that.
        let store = MongoProfileStore::new(StoreConfig {
            uri: "mongodb://nonexistent.invalid:27017".to_string(),
            database: "test".to_string(),
            tenant_id: "not-an-object-id".to_string(),
        });

        match store.fetch().await {
            ProfileLookup::Unavailable(cause) => {
                assert!(cause.contains("invalid tenant id"), "cause: {cause}")
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn into_profile_collapses_failure_arms() {
        assert_eq!(ProfileLookup::NotFound.into_profile(), None);
        assert_eq!(
            ProfileLookup::Unavailable("down".to_string()).into_profile(),
            None
        );
    }
}
