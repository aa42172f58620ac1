//! # Test Utilities
//!
//! A hard-coded in-memory provider that can be used for testing and demos.

#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod store;

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::offer::VerificationOffer;
use crate::provider::{OfferStore, Provider, Result};

pub const VERIFIER_DID: &str = "did:web:demo.verity.id";

// initialise tracing once for all tests
static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// # Panics
///
/// Panics if the tracing subscriber cannot be set.
pub fn init_tracer() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber).expect("subscriber set");
    });
}

/// In-memory provider backed by [`store::Store`].
#[derive(Default, Clone, Debug)]
pub struct ProviderImpl {
    pub offers: store::Store,
}

impl ProviderImpl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offers: store::Store::new(),
        }
    }
}

impl Provider for ProviderImpl {}

impl OfferStore for ProviderImpl {
    async fn put(&self, offer: &VerificationOffer) -> Result<()> {
        self.offers.put(offer)
    }

    async fn get(&self, id: &str) -> Result<Option<VerificationOffer>> {
        self.offers.get(id)
    }
}
