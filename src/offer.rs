//! # Verification Offers
//!
//! Construction of the verification offer: the presentation request a
//! Verifier prepares for a credential holder, together with the metadata
//! needed to track the holder's response.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::dif_exch::{
    ClaimFormat, Constraints, Field, Filter, FilterValue, InputDescriptor, PresentationDefinition,
};
use crate::error::Error;
use crate::Result;

/// A verification offer: a presentation request plus the tracking metadata a
/// credential holder needs to respond.
///
/// Offers are immutable once saved to the offer store and are keyed by their
/// `id`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOffer {
    /// Unique, opaque identifier for the offer. Primary key in the offer
    /// store.
    pub id: String,

    /// DID of the Verifier requesting the presentation.
    pub verifier_did: String,

    /// Absolute URL the holder submits the presentation to.
    pub submission_url: Url,

    /// Absolute URL the Verifier is notified on after the submission has
    /// been processed.
    pub callback_url: Url,

    /// Describes the credential claims the Verifier is requesting. Derived
    /// from the other offer inputs and treated as opaque by the offer store.
    pub presentation_definition: PresentationDefinition,
}

/// Build a verification offer from caller-supplied inputs.
///
/// Construction is pure: no storage or network access, and equal inputs
/// produce structurally equal offers. The caller is responsible for
/// supplying a unique `id`, typically a [`crate::generate::offer_id`] token
/// or a UUID.
///
/// # Errors
///
/// Returns `Error::InvalidRequest` when an input is empty or a URL is not
/// absolute. No partially populated offer is ever returned.
pub fn build_offer(
    id: &str, verifier_did: &str, submission_url: &str, callback_url: &str,
) -> Result<VerificationOffer> {
    if id.is_empty() {
        return Err(Error::InvalidRequest("no offer id specified".to_string()));
    }
    if verifier_did.is_empty() {
        return Err(Error::InvalidRequest("no verifier DID specified".to_string()));
    }

    let submission_url = Url::parse(submission_url)
        .map_err(|e| Error::InvalidRequest(format!("invalid submission URL: {e}")))?;
    let callback_url = Url::parse(callback_url)
        .map_err(|e| Error::InvalidRequest(format!("invalid callback URL: {e}")))?;

    Ok(VerificationOffer {
        id: id.to_string(),
        verifier_did: verifier_did.to_string(),
        submission_url,
        callback_url,
        presentation_definition: presentation_definition(id),
    })
}

// The presentation definition requested by every offer: a single KYC/AML
// attestation credential. Ids derive from the offer id so construction stays
// deterministic.
fn presentation_definition(id: &str) -> PresentationDefinition {
    let fmt = ClaimFormat {
        alg: Some(vec!["EdDSA".to_string()]),
        proof_type: None,
    };

    PresentationDefinition {
        id: id.to_string(),
        input_descriptors: vec![InputDescriptor {
            id: "kyc_aml_attestation".to_string(),
            name: None,
            purpose: None,
            format: None,
            constraints: Constraints {
                fields: Some(vec![Field {
                    path: vec!["$.type".to_string()],
                    filter: Some(Filter {
                        type_: "string".to_string(),
                        value: FilterValue::Const("KYCAMLAttestation".to_string()),
                    }),
                    ..Field::default()
                }]),
                limit_disclosure: None,
            },
        }],
        name: None,
        purpose: Some("To verify a valid KYC/AML attestation".to_string()),
        format: Some(HashMap::from([("jwt_vc".to_string(), fmt)])),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deterministic() {
        let a = build_offer(
            "abc-123",
            "did:example:verifier",
            "https://x/submit",
            "https://x/callback",
        )
        .expect("offer is built");
        let b = build_offer(
            "abc-123",
            "did:example:verifier",
            "https://x/submit",
            "https://x/callback",
        )
        .expect("offer is built");

        assert_eq!(a, b);
    }

    #[test]
    fn serializes_flat() {
        let offer = build_offer(
            "abc-123",
            "did:example:verifier",
            "https://x/submit",
            "https://x/callback",
        )
        .expect("offer is built");

        let ser = serde_json::to_value(&offer).expect("should serialize");
        assert_eq!(ser["id"], "abc-123");
        assert_eq!(ser["verifierDid"], "did:example:verifier");
        assert_eq!(ser["submissionUrl"], "https://x/submit");
        assert_eq!(ser["callbackUrl"], "https://x/callback");
        assert_eq!(
            ser["presentationDefinition"]["input_descriptors"][0]["constraints"]["fields"][0]
                ["filter"],
            json!({"type": "string", "const": "KYCAMLAttestation"})
        );
    }

    #[test]
    fn rejects_empty_inputs() {
        let err = build_offer("", "did:example:verifier", "https://x/submit", "https://x/callback")
            .expect_err("build should fail");
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = build_offer("abc-123", "", "https://x/submit", "https://x/callback")
            .expect_err("build should fail");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn rejects_relative_url() {
        let err = build_offer("abc-123", "did:example:verifier", "/submit", "https://x/callback")
            .expect_err("build should fail");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
