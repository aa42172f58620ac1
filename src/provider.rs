//! # Provider
//!
//! Offer persistence is delegated to the implementer through the traits in
//! this module, keeping the endpoints independent of any particular backing
//! store.

use std::future::Future;

use crate::offer::VerificationOffer;

/// Result type for provider callbacks.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Provider trait implemented by library users.
pub trait Provider: OfferStore + Clone {}

/// `OfferStore` is used to save and retrieve verification offers between
/// requests.
///
/// Offers are keyed by their `id` and immutable once saved. `put` behaves as
/// a keyed insert; the save path (the `create_offer` endpoint) guarantees a
/// saved offer is never replaced with different contents, so the contract
/// holds regardless of backing medium. A `put` for a key must be visible to
/// any `get` for that key issued after the `put` returns, and a `get` must
/// never observe a partially written offer.
pub trait OfferStore: Send + Sync {
    /// Store an offer, keyed by its `id`.
    fn put(&self, offer: &VerificationOffer) -> impl Future<Output = Result<()>> + Send;

    /// Retrieve the offer stored under `id`, or `None` when the key is
    /// unknown.
    fn get(&self, id: &str) -> impl Future<Output = Result<Option<VerificationOffer>>> + Send;
}
