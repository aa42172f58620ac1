use verity_verifier::offer::VerificationOffer;
use verity_verifier::provider::{OfferStore, Result};
use verity_verifier::test_utils::store::Store;

#[derive(Default, Clone, Debug)]
pub struct Provider {
    pub offers: Store,
}

impl Provider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offers: Store::new(),
        }
    }
}

impl verity_verifier::provider::Provider for Provider {}

impl OfferStore for Provider {
    async fn put(&self, offer: &VerificationOffer) -> Result<()> {
        self.offers.put(offer)
    }

    async fn get(&self, id: &str) -> Result<Option<VerificationOffer>> {
        self.offers.get(id)
    }
}
