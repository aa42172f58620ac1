//! # Create Offer Endpoint
//!
//! This endpoint is used by the Verifier to create a verification offer and
//! save it for sharing with a credential holder.
//!
//! Instead of sending the offer to the holder directly, the Verifier shares
//! a link containing the offer identifier. The holder's wallet uses the link
//! to retrieve the offer from the `Verification Offer` endpoint.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::generate;
use crate::offer::{build_offer, VerificationOffer};
use crate::provider::{OfferStore, Provider};
use crate::{Error, Result};

/// Create a verification offer and save it, keyed by its identifier.
///
/// Re-saving an identical offer under its own identifier is idempotent.
///
/// # Errors
///
/// Returns `InvalidRequest` when construction inputs are missing or
/// malformed, and `Conflict` when an offer with the same identifier but
/// different contents has already been saved.
#[instrument(level = "debug", skip(provider))]
pub async fn create_offer(
    provider: impl Provider, request: &CreateOfferRequest,
) -> Result<CreateOfferResponse> {
    process(provider, request).await
}

async fn process(
    provider: impl Provider, request: &CreateOfferRequest,
) -> Result<CreateOfferResponse> {
    tracing::debug!("create_offer::process");

    let id = request.offer_id.clone().unwrap_or_else(generate::offer_id);
    let offer = build_offer(
        &id,
        &request.verifier_did,
        &request.submission_url,
        &request.callback_url,
    )?;

    // saved offers are immutable: re-save of an identical offer is a no-op,
    // anything else under the same key is rejected
    if let Some(existing) = OfferStore::get(&provider, &offer.id)
        .await
        .map_err(|e| Error::ServerError(format!("issue fetching offer: {e}")))?
    {
        if existing == offer {
            return Ok(CreateOfferResponse { offer });
        }
        return Err(Error::Conflict(format!("offer already exists for id: {id}")));
    }

    OfferStore::put(&provider, &offer)
        .await
        .map_err(|e| Error::ServerError(format!("issue saving offer: {e}")))?;

    Ok(CreateOfferResponse { offer })
}

/// Request to create a verification offer.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOfferRequest {
    /// Identifier for the offer. Generated when not supplied; callers
    /// providing their own identifier are responsible for its uniqueness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,

    /// DID of the Verifier requesting the presentation.
    pub verifier_did: String,

    /// Absolute URL the holder must submit the presentation to.
    pub submission_url: String,

    /// Absolute URL the Verifier is notified on after submission.
    pub callback_url: String,
}

/// Response to a `Create Offer` request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateOfferResponse {
    /// The verification offer, exactly as saved in the offer store.
    #[serde(flatten)]
    pub offer: VerificationOffer,
}
