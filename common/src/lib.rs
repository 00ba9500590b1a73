//! Shared domain types for the DEX signal workspace.
//!
//! `TokenSnapshot` is the normalized, point-in-time view of a token's most
//! liquid trading pair. It is produced by `data-ingestion` and consumed by
//! `signal-generation`.

mod address;
mod snapshot;

pub use address::{AddressError, TokenAddress};
pub use snapshot::TokenSnapshot;
