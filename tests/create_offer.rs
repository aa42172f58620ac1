//! Tests for the `create_offer` endpoint.

use assert_let_bind::assert_let;
use serde_json::json;
use verity_verifier::provider::OfferStore;
use verity_verifier::test_utils::{self, ProviderImpl, VERIFIER_DID};
use verity_verifier::{build_offer, create_offer, CreateOfferRequest, Error};

#[tokio::test]
async fn generated_id() {
    test_utils::init_tracer();
    let provider = ProviderImpl::new();

    let body = json!({
        "verifierDid": VERIFIER_DID,
        "submissionUrl": "https://verifier.example.com/verification/submission",
        "callbackUrl": "https://verifier.example.com/verification/callback"
    });
    let request = serde_json::from_value::<CreateOfferRequest>(body).expect("should deserialize");

    let response = create_offer(provider.clone(), &request).await.expect("response is ok");
    assert!(!response.offer.id.is_empty());

    // offer is retrievable under its own id
    let saved = OfferStore::get(&provider, &response.offer.id)
        .await
        .expect("no store error")
        .expect("offer exists");
    assert_eq!(saved, response.offer);
}

#[tokio::test]
async fn explicit_id() {
    test_utils::init_tracer();
    let provider = ProviderImpl::new();

    let body = json!({
        "offerId": "abc-123",
        "verifierDid": "did:example:verifier",
        "submissionUrl": "https://x/submit",
        "callbackUrl": "https://x/callback"
    });
    let request = serde_json::from_value::<CreateOfferRequest>(body).expect("should deserialize");

    let response = create_offer(provider.clone(), &request).await.expect("response is ok");

    // the saved offer is exactly what the builder produces for these inputs
    let expected =
        build_offer("abc-123", "did:example:verifier", "https://x/submit", "https://x/callback")
            .expect("offer is built");
    assert_eq!(response.offer, expected);

    let saved = OfferStore::get(&provider, "abc-123").await.expect("no store error");
    assert_let!(Some(saved), saved);
    assert_eq!(saved, expected);
}

#[tokio::test]
async fn idempotent_resave() {
    test_utils::init_tracer();
    let provider = ProviderImpl::new();

    let request = CreateOfferRequest {
        offer_id: Some("abc-123".to_string()),
        verifier_did: "did:example:verifier".to_string(),
        submission_url: "https://x/submit".to_string(),
        callback_url: "https://x/callback".to_string(),
    };

    let first = create_offer(provider.clone(), &request).await.expect("response is ok");
    let second = create_offer(provider.clone(), &request).await.expect("re-save is idempotent");
    assert_eq!(first, second);

    let saved = OfferStore::get(&provider, "abc-123")
        .await
        .expect("no store error")
        .expect("offer exists");
    assert_eq!(saved, first.offer);
}

#[tokio::test]
async fn conflicting_resave() {
    test_utils::init_tracer();
    let provider = ProviderImpl::new();

    let request = CreateOfferRequest {
        offer_id: Some("abc-123".to_string()),
        verifier_did: "did:example:verifier".to_string(),
        submission_url: "https://x/submit".to_string(),
        callback_url: "https://x/callback".to_string(),
    };
    create_offer(provider.clone(), &request).await.expect("response is ok");

    // same key, different payload
    let conflicting = CreateOfferRequest {
        callback_url: "https://elsewhere/callback".to_string(),
        ..request
    };
    let err = create_offer(provider.clone(), &conflicting).await.expect_err("save should fail");
    assert!(matches!(err, Error::Conflict(_)));

    // the original offer is untouched
    let saved = OfferStore::get(&provider, "abc-123")
        .await
        .expect("no store error")
        .expect("offer exists");
    assert_eq!(saved.callback_url.as_str(), "https://x/callback");
}

#[tokio::test]
async fn invalid_input() {
    test_utils::init_tracer();
    let provider = ProviderImpl::new();

    // missing verifier DID
    let request = CreateOfferRequest {
        offer_id: None,
        verifier_did: String::new(),
        submission_url: "https://x/submit".to_string(),
        callback_url: "https://x/callback".to_string(),
    };
    let err = create_offer(provider.clone(), &request).await.expect_err("create should fail");
    assert!(matches!(err, Error::InvalidRequest(_)));

    // relative submission URL
    let request = CreateOfferRequest {
        offer_id: None,
        verifier_did: "did:example:verifier".to_string(),
        submission_url: "verification/submission".to_string(),
        callback_url: "https://x/callback".to_string(),
    };
    let err = create_offer(provider.clone(), &request).await.expect_err("create should fail");
    assert!(matches!(err, Error::InvalidRequest(_)));
}
