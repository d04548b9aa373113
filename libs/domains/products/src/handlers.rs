//! HTTP handlers for Products API

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{BadRequestJsonResponse, InternalServerErrorResponse},
    JsonBody,
};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::Product;
use crate::service::ProductService;

/// Service handle shared by every request
pub type SharedProductService = Arc<dyn ProductService>;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, add_product),
    components(
        schemas(Product),
        responses(BadRequestJsonResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router
///
/// The router is meant to be nested under `/products`; both routes live on its root.
pub fn router(service: SharedProductService) -> Router {
    Router::new()
        .route("/", get(list_products).post(add_product))
        .with_state(service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(service))]
async fn list_products(
    State(service): State<SharedProductService>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_all_products().await?;
    debug!(count = products.len(), "Listed products");
    Ok(Json(products))
}

/// Add a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product as stored by the service", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip(service, product))]
async fn add_product(
    State(service): State<SharedProductService>,
    JsonBody(product): JsonBody<Product>,
) -> ProductResult<Json<Product>> {
    let created = service.create_product(product).await?;
    debug!(product_id = ?created.id, "Product created");
    Ok(Json(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::service::MockProductService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use tower::ServiceExt;

    fn app(service: MockProductService) -> Router {
        router(Arc::new(service))
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_products() -> Request<Body> {
        Request::get("/").body(Body::empty()).unwrap()
    }

    fn post_product(body: &'static str) -> Request<Body> {
        Request::post("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_products_passes_service_result_through() {
        let mut service = MockProductService::new();
        service.expect_get_all_products().times(1).returning(|| {
            Ok(vec![Product {
                id: Some(1),
                name: Some("Widget".to_string()),
                description: None,
                price: Some(9.99),
            }])
        });

        let response = app(service).oneshot(get_products()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"[{"id":1,"name":"Widget","price":9.99}]"#
        );
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let mut service = MockProductService::new();
        service
            .expect_get_all_products()
            .times(1)
            .returning(|| Ok(vec![]));

        let response = app(service).oneshot(get_products()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_list_products_keeps_service_order() {
        let mut service = MockProductService::new();
        service.expect_get_all_products().returning(|| {
            Ok([3, 1, 2]
                .into_iter()
                .map(|id| Product::default().with_id(id))
                .collect())
        });

        let response = app(service).oneshot(get_products()).await.unwrap();
        assert_eq!(
            body_string(response).await,
            r#"[{"id":3},{"id":1},{"id":2}]"#
        );
    }

    #[tokio::test]
    async fn test_add_product_forwards_body_once_and_returns_service_result() {
        let mut service = MockProductService::new();
        service
            .expect_create_product()
            .with(eq(Product {
                id: None,
                name: Some("Gadget".to_string()),
                description: None,
                price: Some(4.5),
            }))
            .times(1)
            .returning(|product| Ok(product.with_id(2)));

        let response = app(service)
            .oneshot(post_product(r#"{"name":"Gadget","price":4.50}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"id":2,"name":"Gadget","price":4.5}"#
        );
    }

    #[tokio::test]
    async fn test_add_product_returns_service_value_not_input() {
        let mut service = MockProductService::new();
        service.expect_create_product().returning(|_| {
            Ok(Product {
                id: Some(10),
                name: Some("Renamed by service".to_string()),
                ..Default::default()
            })
        });

        let response = app(service)
            .oneshot(post_product(r#"{"name":"Original"}"#))
            .await
            .unwrap();

        let created: Product = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(created.id, Some(10));
        assert_eq!(created.name.as_deref(), Some("Renamed by service"));
    }

    #[tokio::test]
    async fn test_add_product_with_empty_body_object() {
        let mut service = MockProductService::new();
        service
            .expect_create_product()
            .with(eq(Product::default()))
            .times(1)
            .returning(|product| Ok(product.with_id(1)));

        let response = app(service).oneshot(post_product("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"id":1}"#);
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_service() {
        let mut service = MockProductService::new();
        service.expect_create_product().never();

        let response = app(service)
            .oneshot(post_product(r#"{"name":"Gadget""#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "JSON_EXTRACTION");
    }

    #[tokio::test]
    async fn test_service_failure_is_internal_server_error() {
        let mut service = MockProductService::new();
        service
            .expect_get_all_products()
            .returning(|| Err(ProductError::Storage("connection refused".to_string())));

        let response = app(service).oneshot(get_products()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["code"], 1005);
        assert_eq!(body["error"], "INTERNAL_ERROR");
    }

    #[test]
    fn test_openapi_lists_both_operations() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 1);
        let item = paths.values().next().unwrap();
        assert!(item.get("get").is_some());
        assert!(item.get("post").is_some());
        assert!(doc["components"]["schemas"].get("Product").is_some());
    }
}
