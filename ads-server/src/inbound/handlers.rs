use super::api::{ApiError, ApiSuccess};
use crate::domain::models::{
    AdLink, AdLinkEmptyError, AdName, AdNameEmptyError, Advertisement, CreateAdRequest,
};
use crate::domain::ports::AdService;
use crate::inbound::AppState;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub(super) enum ParseCreateAdHttpRequestError {
    #[error(transparent)]
    Name(#[from] AdNameEmptyError),
    #[error(transparent)]
    Link(#[from] AdLinkEmptyError),
}

/// The body of an [Advertisement] creation request.
///
/// Both fields decode as optional so that an absent field is rejected by validation with a
/// 400, the same as an empty one, rather than by the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAdHttpRequestBody {
    name: Option<String>,
    link: Option<String>,
}

impl CreateAdHttpRequestBody {
    /// Converts the HTTP request body into a domain request.
    fn try_into_domain(self) -> Result<CreateAdRequest, ParseCreateAdHttpRequestError> {
        let name = AdName::new(self.name.as_deref().unwrap_or_default())?;
        let link = AdLink::new(self.link.as_deref().unwrap_or_default())?;

        Ok(CreateAdRequest::new(name, link))
    }
}

/// The response body for a sampled [Advertisement].
///
/// An empty store serializes as `{}`, keeping the endpoint's long-standing shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct GetAdResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl From<&Advertisement> for GetAdResponseData {
    fn from(ad: &Advertisement) -> Self {
        Self {
            name: Some(ad.name().as_str().to_string()),
            link: Some(ad.link().as_str().to_string()),
        }
    }
}

/// Serve one randomly sampled [Advertisement].
///
/// # Responses
///
/// - 200 OK: a sampled advertisement, or `{}` when none are stored.
/// - 500 Internal server error: the sampling query failed.
pub(super) async fn get_ads_handler<AS: AdService>(
    State(state): State<AppState<AS>>,
) -> Result<ApiSuccess<GetAdResponseData>, ApiError> {
    state
        .ad_service
        .random_ad()
        .await
        .map_err(ApiError::from)
        .map(|ad| {
            let data = ad.as_ref().map(GetAdResponseData::from).unwrap_or_default();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

/// Create a new [Advertisement].
///
/// # Responses
///
/// - 200 OK: the advertisement was stored; the body is empty.
/// - 400 Bad request: `name` or `link` was missing or empty; nothing was stored.
/// - 500 Internal server error: the insert failed.
pub(super) async fn create_ads_handler<AS: AdService>(
    State(state): State<AppState<AS>>,
    Json(body): Json<CreateAdHttpRequestBody>,
) -> Result<StatusCode, ApiError> {
    let domain_req = body.try_into_domain()?;

    state
        .ad_service
        .create_ad(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::OK)
}

#[cfg(test)]
mod test {
    use axum::response::IntoResponse;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::service::Service;
    use crate::outbound::metrics::NullMetrics;
    use crate::outbound::repositories::InMemoryAdStore;

    fn body(name: Option<&str>, link: Option<&str>) -> CreateAdHttpRequestBody {
        CreateAdHttpRequestBody {
            name: name.map(Into::into),
            link: link.map(Into::into),
        }
    }

    fn empty_state() -> State<AppState<Service<InMemoryAdStore, NullMetrics>>> {
        State(AppState {
            ad_service: Service::new(InMemoryAdStore::new(), NullMetrics),
        })
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_try_into_domain_missing_name() {
        let result = body(None, Some("http://acme.test")).try_into_domain();

        assert!(matches!(
            result,
            Err(ParseCreateAdHttpRequestError::Name(_))
        ));
    }

    #[test]
    fn test_try_into_domain_empty_link() {
        let result = body(Some("Acme"), Some("")).try_into_domain();

        assert!(matches!(
            result,
            Err(ParseCreateAdHttpRequestError::Link(_))
        ));
    }

    #[test]
    fn test_try_into_domain_accepts_complete_body() {
        let req = body(Some("Acme"), Some("http://acme.test"))
            .try_into_domain()
            .unwrap();

        assert_eq!(req.name().as_str(), "Acme");
        assert_eq!(req.link().as_str(), "http://acme.test");
    }

    #[test]
    fn test_empty_store_response_serializes_to_empty_object() {
        let serialized = serde_json::to_string(&GetAdResponseData::default()).unwrap();

        assert_eq!(serialized, "{}");
    }

    #[tokio::test]
    async fn test_get_ads_on_empty_store_returns_empty_object() {
        let response = get_ads_handler(empty_state()).await.unwrap().into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn test_created_ad_is_served_back() {
        let state = empty_state();

        let status = create_ads_handler(
            state.clone(),
            Json(body(Some("Acme"), Some("http://acme.test"))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);

        let response = get_ads_handler(state).await.unwrap().into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!({ "name": "Acme", "link": "http://acme.test" }),
        );
    }

    #[tokio::test]
    async fn test_missing_link_is_rejected_and_nothing_stored() {
        let state = empty_state();

        let result = create_ads_handler(state.clone(), Json(body(Some("Acme"), None))).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));

        let response = get_ads_handler(state).await.unwrap().into_response();
        assert_eq!(response_json(response).await, json!({}));
    }
}
