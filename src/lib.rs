//! Tenant Landing Service
//!
//! A per-tenant marketing landing page for tradespeople. One fixed tenant
//! record is fetched from MongoDB, projected into a fully-shaped profile,
//! and rendered as a static page; a stateless endpoint relays contact-form
//! submissions as outbound email to a single fixed operator address.
//!
//! ## Architecture
//!
//! Two independent stateless flows, composed only by sharing a deployment
//! unit:
//!
//! 1. **Profile fetch & render** (`store` → `profile` → `render`): lookup by
//!    a fixed configured id, defaulting projection, static HTML. The data
//!    layer fails soft: any lookup failure renders a placeholder page rather
//!    than failing the request.
//!
//! 2. **Contact relay** (`relay` → `handler`): `POST /api/contact` forwards
//!    `{name, email, message}` as plain-text mail over SMTP. Fire-and-forget,
//!    no retry, no delivery guarantee beyond the accepted hand-off.
//!
//! Both external collaborators sit behind traits ([`ProfileStore`],
//! [`MailTransport`]) so tests run against stubs with no network and no
//! process-environment manipulation.

pub mod config;
pub mod error;
pub mod handler;
pub mod profile;
pub mod relay;
pub mod render;
pub mod store;

pub use config::{MailConfig, ServiceConfig, StoreConfig};
pub use error::{ConfigError, RelayError};
pub use handler::{create_router, AppState, ContactResponse, HealthResponse};
pub use profile::{project_profile, ContactMessage, TenantProfile};
pub use relay::{MailTransport, SmtpRelay};
pub use store::{MemoryProfileStore, MongoProfileStore, ProfileLookup, ProfileStore};

/// Service version (from Cargo.toml).
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service identifier used in logs.
pub const SERVICE_ID: &str = "tenant-landing";
