//! An API for managing verification offers: the presentation requests a
//! Verifier prepares when asking a credential holder to prove claims from a
//! Verifiable Credential.
//!
//! # Verification Offers
//!
//! A verification offer combines a [Presentation Definition] (a structured
//! description of the credential claims the Verifier requires) with the
//! tracking metadata a holder needs to respond: the URL presentations are
//! submitted to and the URL the Verifier is notified on once a submission has
//! been processed.
//!
//! The exchange is deliberately small. The Verifier builds an offer, saves it
//! keyed by its identifier, and shares a link containing that identifier. The
//! holder's wallet dereferences the link to retrieve the offer, then submits
//! its presentation to the offer's `submissionUrl` endpoint (outside the
//! scope of this library).
//!
//! ```text
//! +--------------+                                    +--------------+
//! |   Verifier   |                                    |    Wallet    |
//! +--------------+                                    +--------------+
//!         |                                                   |
//!         |  (1) Create Offer                                 |
//!         |      (build + save, keyed by offer id)            |
//!         |                                                   |
//!         |  (2) Offer link (contains offer id)               |
//!         |-------------------------------------------------->|
//!         |                                                   |
//!         |  (3) Retrieve Verification Offer                  |
//!         |<--------------------------------------------------|
//!         |                                                   |
//!         |  (3.5) Respond with the Offer                     |
//!         |      (Presentation Definition)                    |
//!         |-------------------------------------------------->|
//!         |                                                   |
//!         |  (4) Submit Verifiable Presentation               |
//!         |      (to submissionUrl, not handled here)         |
//!         |<--------------------------------------------------|
//! ```
//!
//! # Design
//!
//! **Endpoints**
//!
//! The library is architected around two endpoints, each with its own
//! `XxxRequest` and `XxxResponse` types. The types serialize to and from
//! JSON.
//!
//! The endpoints are designed to be used with Rust-based HTTP servers, such
//! as [axum](https://docs.rs/axum/latest/axum/), with a few lines of
//! 'wrapper' code for each endpoint.
//!
//! In addition, implementers need to implement an [`provider::OfferStore`]
//! provider that is responsible for offer persistence. Offers are immutable
//! once saved, so any keyed store will do. The in-memory store in
//! [`test_utils`] is sufficient for testing and demos.
//!
//! # Example
//!
//! The following example demonstrates how the endpoints might be surfaced.
//! A number of elements have been excluded for brevity. A more complete
//! example can be found in the `demos` directory.
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() {
//!     let router = Router::new()
//!         .route("/verification", post(create_offer))
//!         .route("/verification/:id", get(verification_offer))
//!         .with_state(Provider::new());
//!
//!     let listener = TcpListener::bind("0.0.0.0:8080").await.expect("should bind");
//!     axum::serve(listener, router).await.expect("server should run");
//! }
//!
//! // Verification offer endpoint
//! async fn verification_offer(
//!     State(provider): State<Provider>, Path(id): Path<String>,
//! ) -> AxResult<OfferResponse> {
//!     let request = OfferRequest { id };
//!     verity_verifier::verification_offer(provider, &request).await.into()
//! }
//! ```
//!
//! [Presentation Definition]: https://identity.foundation/presentation-exchange/spec/v2.0.0/#presentation-definition

mod create_offer;
pub mod dif_exch;
mod error;
pub mod generate;
pub mod offer;
pub mod provider;
pub mod test_utils;
mod verification_offer;

pub use create_offer::{create_offer, CreateOfferRequest, CreateOfferResponse};
pub use error::Error;
pub use offer::{build_offer, VerificationOffer};
pub use verification_offer::{verification_offer, OfferRequest, OfferResponse};

/// Result type for endpoints.
pub type Result<T, E = Error> = std::result::Result<T, E>;
