// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # OrderTime Gateway
//!
//! A compatibility layer in front of the OrderTime ERP HTTP API. Different
//! tenants of the upstream use different authentication header names,
//! endpoint spellings, request payload shapes, and response envelopes, and
//! none of it is reliably discoverable ahead of time.
//!
//! The gateway solves this by **probing**: for every logical operation it
//! enumerates the known (auth-header-set, endpoint-path, payload-shape)
//! conventions in a fixed priority order, issues one request per combination,
//! and stops at the first acceptable response. Whatever shape comes back is
//! decoded out of its envelope and normalized into one stable canonical
//! record per entity kind.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Gateway Interface                        │
//! │  search_customers()   get_customer()   search_items() ...       │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │
//! ┌──────────┬───────────┬────────┴──────┬─────────────┬────────────┐
//! │   Auth   │ Endpoint  │     Probe     │   Decode    │ Normalize  │
//! ├──────────┼───────────┼───────────────┼─────────────┼────────────┤
//! │ Bearer   │ /list     │ Cross-product │ Envelope    │ Customer   │
//! │ API Key  │ /entityref│ First accept  │ extraction  │ Item       │
//! │ Key+Email│ /Entity/  │ Per-call      │ Raw-text    │ SalesOrder │
//! │          │   Search  │   timeout     │ fallback    │            │
//! └──────────┴───────────┴───────────────┴─────────────┴────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ordertime_gateway::{Gateway, GatewayConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = GatewayConfig::from_env()?;
//!     let gateway = Gateway::new(config)?;
//!
//!     let customers = gateway.search_customers("acme", 1, 25).await?;
//!     for c in customers {
//!         println!("{} {}", c.id, c.company);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the gateway
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration and credential material
pub mod config;

/// Authentication header-set candidates
pub mod auth;

/// Endpoint path and payload-shape candidates
pub mod endpoint;

/// HTTP transport
pub mod http;

/// Cross-product probing executor
pub mod probe;

/// Response body and envelope decoding
pub mod decode;

/// Canonical records and field normalizers
pub mod normalize;

/// Merge/dedup of fanned-out search results
pub mod merge;

/// High-level gateway facade
pub mod gateway;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{Credentials, GatewayConfig};
pub use gateway::Gateway;
pub use normalize::{CanonicalCustomer, CanonicalItem, CanonicalSalesOrder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
