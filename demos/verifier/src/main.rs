//! # Verifier Demo
//!
//! A small verifier service surfacing the verification offer exchange over
//! HTTP: offers are created with a POST and retrieved by the holder's wallet
//! with a GET on the shared offer link.

mod provider;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::headers::Host;
use axum_extra::TypedHeader;
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use verity_verifier::{
    CreateOfferRequest, CreateOfferResponse, Error, OfferRequest, OfferResponse,
};

use crate::provider::Provider;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cors = CorsLayer::new().allow_methods(Any).allow_origin(Any).allow_headers(Any);

    let router = Router::new()
        .route("/verification", post(create_offer))
        .route("/verification/:id", get(verification_offer))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Provider::new());

    let listener = TcpListener::bind("0.0.0.0:8080").await.expect("should bind");
    tracing::info!("listening on {}", listener.local_addr().expect("local_addr should be set"));
    axum::serve(listener, router).await.expect("should run");
}

// Create verification offer endpoint
#[axum::debug_handler]
async fn create_offer(
    State(provider): State<Provider>, TypedHeader(host): TypedHeader<Host>,
    Json(mut request): Json<CreateOfferRequest>,
) -> AxResult<CreateOfferResponse> {
    request.verifier_did = std::env::var("VERIFIER_DID")
        .unwrap_or_else(|_| verity_verifier::test_utils::VERIFIER_DID.to_string());
    request.submission_url = format!("http://{host}/verification/submission");
    request.callback_url = format!("http://{host}/verification/callback");

    verity_verifier::create_offer(provider, &request).await.into()
}

// Retrieve verification offer endpoint
#[axum::debug_handler]
async fn verification_offer(
    State(provider): State<Provider>, Path(id): Path<String>,
) -> AxResult<OfferResponse> {
    let request = OfferRequest { id };
    verity_verifier::verification_offer(provider, &request).await.into()
}

// ----------------------------------------------------------------------------
// Axum Response
// ----------------------------------------------------------------------------

/// Axum response wrapper
pub struct AxResult<T>(verity_verifier::Result<T>);

impl<T> IntoResponse for AxResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self.0 {
            Ok(v) => (StatusCode::OK, Json(json!(v))).into_response(),
            Err(e) => {
                let status = match &e {
                    Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                    Error::NotFound(_) => StatusCode::NOT_FOUND,
                    Error::Conflict(_) => StatusCode::CONFLICT,
                    Error::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(e.to_json())).into_response()
            }
        }
    }
}

impl<T> From<verity_verifier::Result<T>> for AxResult<T> {
    fn from(val: verity_verifier::Result<T>) -> Self {
        Self(val)
    }
}
