//! Record trait for registry entries.

use chrono::{DateTime, Utc};

/// Trait for records that can live in a [`Store`](crate::store::Store).
///
/// The registry sees exactly one thing about a record beyond the identifier
/// it is keyed under: its creation time, used to order [`list`] output.
/// Every other field belongs to the caller's domain and is only ever
/// observed through the filter and reducer capabilities the caller supplies.
///
/// [`list`]: crate::store::Store::list
pub trait Record: Send + Sync + 'static {
    /// When this record was created.
    fn created_at(&self) -> DateTime<Utc>;
}
