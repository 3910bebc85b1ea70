//! HTTP layer: routing, request/response shapes, and error mapping.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::config::AppConfig;
use crate::core::model::{Category, PriceSnapshot};
use crate::portfolio::{NewPortfolioItem, PortfolioItem, PortfolioItemUpdate, PortfolioService};
use crate::prices::PriceService;

/// Single-user deployment owner until an auth story exists.
pub const DEFAULT_OWNER: &str = "default";

pub struct AppState {
    pub prices: PriceService,
    pub portfolio: PortfolioService,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Portfolio item not found")]
    NotFound,
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                error!(error = %e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

async fn root() -> Json<serde_json::Value> {
    Json(json!({"message": "Sarraf API"}))
}

#[derive(Deserialize)]
struct PricesQuery {
    #[serde(rename = "type")]
    category: Option<String>,
}

// The fallback guarantee makes this handler infallible: upstream outages
// were already absorbed into static data by the provider.
async fn get_prices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PricesQuery>,
) -> Json<PriceSnapshot> {
    let category = query
        .category
        .as_deref()
        .unwrap_or("all")
        .parse::<Category>()
        .unwrap_or_default();
    Json(state.prices.get_prices(category).await)
}

async fn create_portfolio_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPortfolioItem>,
) -> ApiResult<Json<PortfolioItem>> {
    let item = state.portfolio.create(DEFAULT_OWNER, payload).await?;
    Ok(Json(item))
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<PortfolioItem>>> {
    let items = state.portfolio.list(DEFAULT_OWNER).await?;
    Ok(Json(items))
}

async fn update_portfolio_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PortfolioItemUpdate>,
) -> ApiResult<Json<PortfolioItem>> {
    let updated = state
        .portfolio
        .update(DEFAULT_OWNER, &id, payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(updated))
}

async fn delete_portfolio_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    if state.portfolio.delete(DEFAULT_OWNER, &id).await? {
        Ok(Json(json!({"message": "Portfolio item deleted successfully"})))
    } else {
        Err(ApiError::NotFound)
    }
}

pub fn app_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    let cors = if config.server.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .server
            .cors_origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api = Router::new()
        .route("/", get(root))
        .route("/prices", get(get_prices))
        .route("/portfolio", get(get_portfolio).post(create_portfolio_item))
        .route(
            "/portfolio/{id}",
            put(update_portfolio_item).delete(delete_portfolio_item),
        )
        .with_state(state);

    Router::new()
        // axum nests the inner `/` route at `/api` (no trailing slash); the
        // spec addresses the banner at `/api/`, so wire that path explicitly.
        .route("/api/", get(root))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PriceBoard, PriceItem, UNIT};
    use crate::core::price::PriceSource;
    use crate::store::memory::MemoryCollection;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    struct StubSource;

    #[async_trait]
    impl PriceSource for StubSource {
        async fn fetch_prices(&self) -> PriceBoard {
            PriceBoard {
                gold: vec![PriceItem {
                    id: 1,
                    name: "HAS ALTIN".to_string(),
                    name_en: "PURE GOLD".to_string(),
                    buy: 5807.5,
                    sell: 5858.7,
                    change: 0.74,
                    symbol: None,
                    unit: UNIT.to_string(),
                }],
                currency: vec![PriceItem {
                    id: 1,
                    name: "USD".to_string(),
                    name_en: "USD".to_string(),
                    buy: 34.125,
                    sell: 34.225,
                    change: 0.55,
                    symbol: Some("$".to_string()),
                    unit: UNIT.to_string(),
                }],
            }
        }
    }

    fn test_router() -> Router {
        let state = Arc::new(AppState {
            prices: PriceService::new(Arc::new(StubSource)),
            portfolio: PortfolioService::new(Arc::new(MemoryCollection::new())),
        });
        app_router(state, &AppConfig::default())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn test_root_banner() {
        let (status, json) = get_json(&test_router(), "/api/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Sarraf API");
    }

    #[tokio::test]
    async fn test_prices_default_returns_both() {
        let (status, json) = get_json(&test_router(), "/api/prices").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.get("gold").is_some());
        assert!(json.get("currency").is_some());
        assert!(json.get("lastUpdate").is_some());
    }

    #[tokio::test]
    async fn test_prices_gold_projection() {
        let (status, json) = get_json(&test_router(), "/api/prices?type=gold").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["gold"][0]["nameEn"], "PURE GOLD");
        assert!(json.get("currency").is_none());
        assert!(json.get("lastUpdate").is_some());
    }

    #[tokio::test]
    async fn test_prices_currency_projection() {
        let (status, json) = get_json(&test_router(), "/api/prices?type=currency").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.get("gold").is_none());
        assert_eq!(json["currency"][0]["symbol"], "$");
    }

    #[tokio::test]
    async fn test_portfolio_crud_round_trip() {
        let router = test_router();

        let create = Request::builder()
            .method("POST")
            .uri("/api/portfolio")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"type": "gold", "name": "GRAM ALTIN", "nameEn": "GRAM GOLD", "quantity": 2.5, "buyPrice": 5778.46}"#,
            ))
            .unwrap();
        let response = router.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["type"], "gold");
        assert_eq!(created["userId"], "default");

        let (status, listed) = get_json(&router, "/api/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let update = Request::builder()
            .method("PUT")
            .uri(format!("/api/portfolio/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"quantity": 5.0}"#))
            .unwrap();
        let response = router.clone().oneshot(update).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["quantity"], 5.0);
        assert_eq!(updated["buyPrice"], 5778.46);

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/portfolio/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (_, listed) = get_json(&router, "/api/portfolio").await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_item_is_404() {
        let update = Request::builder()
            .method("PUT")
            .uri("/api/portfolio/does-not-exist")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"quantity": 1.0}"#))
            .unwrap();
        let response = test_router().oneshot(update).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], 404);
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_404() {
        let delete = Request::builder()
            .method("DELETE")
            .uri("/api/portfolio/does-not-exist")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
