//! # Verification Offer Endpoint
//!
//! This endpoint is used by the holder's wallet to retrieve a previously
//! created verification offer.
//!
//! The offer is created by the Verifier calling the `Create Offer` endpoint.
//! The Verifier shares a link containing the offer identifier; the wallet
//! dereferences the link here to obtain the presentation request.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::offer::VerificationOffer;
use crate::provider::{OfferStore, Provider};
use crate::{Error, Result};

/// Endpoint for the wallet to retrieve a verification offer by identifier.
///
/// # Errors
///
/// Returns `NotFound` when no offer is saved under the requested identifier.
/// Unknown and syntactically invalid identifiers resolve to the same
/// not-found outcome.
#[instrument(level = "debug", skip(provider))]
pub async fn verification_offer(
    provider: impl Provider, request: &OfferRequest,
) -> Result<OfferResponse> {
    process(provider, request).await
}

async fn process(provider: impl Provider, request: &OfferRequest) -> Result<OfferResponse> {
    tracing::debug!("verification_offer::process");

    let Some(offer) = OfferStore::get(&provider, &request.id)
        .await
        .map_err(|e| Error::ServerError(format!("issue fetching offer: {e}")))?
    else {
        return Err(Error::NotFound(format!("no offer found for id: {}", request.id)));
    };

    Ok(OfferResponse { offer })
}

/// Request to retrieve a verification offer.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OfferRequest {
    /// Identifier of the offer to retrieve.
    pub id: String,
}

/// Response to a `Verification Offer` request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OfferResponse {
    /// The verification offer, exactly as saved.
    #[serde(flatten)]
    pub offer: VerificationOffer,
}
