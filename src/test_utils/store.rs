//! In-memory offer storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::offer::VerificationOffer;
use crate::provider::Result;

/// In-memory offer store. `put` is a keyed insert and `get` clones the
/// stored value; readers never observe a partially written offer.
#[derive(Default, Clone, Debug)]
pub struct Store {
    store: Arc<Mutex<HashMap<String, VerificationOffer>>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[allow(clippy::unnecessary_wraps)]
    pub fn put(&self, offer: &VerificationOffer) -> Result<()> {
        self.store.lock().expect("should lock").insert(offer.id.clone(), offer.clone());
        Ok(())
    }

    #[allow(clippy::unnecessary_wraps)]
    pub fn get(&self, id: &str) -> Result<Option<VerificationOffer>> {
        Ok(self.store.lock().expect("should lock").get(id).cloned())
    }
}
