//! # Crewd Registry
//!
//! In-memory registry of live records for the crewd orchestrator.
//!
//! This is the authoritative in-process index the orchestrator consults to
//! locate and iterate over live records; it never touches a persistent
//! backing store. Records are caller-owned: the registry stores `Arc`
//! handles and only ever looks at a record's creation time, used to order
//! enumeration.
//!
//! ## Components
//!
//! - [`Store`] - the store contract the rest of the system consumes
//! - [`MemoryStore`] - the hash-map-backed implementation
//! - [`Record`] - what a record must expose to be stored
//!
//! ## Concurrency
//!
//! One reader/writer lock guards the whole mapping. Mutations hold write
//! access only for the O(1) map update; lookups share read access.
//! [`Store::apply_all`] fans the reducer out over every record in parallel
//! and holds read access until the last invocation finishes, so writers
//! queue behind the fan-out while readers proceed alongside it.

mod history;
pub mod record;
pub mod store;

pub use record::Record;
pub use store::{Filter, MemoryStore, Reducer, Store};
