use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, MessageResponse, Product, RestockOverride, RestockStatus, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product CRUD endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, update_product, delete_product),
    components(
        schemas(Product, CreateProduct, UpdateProduct, MessageResponse, ErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ProductApiDoc;

/// OpenAPI documentation for the restock endpoints
#[derive(OpenApi)]
#[openapi(
    paths(restock_status, set_restock_flag, list_needing_restock),
    components(schemas(Product, RestockOverride, RestockStatus, ErrorResponse)),
    tags(
        (name = "Restock", description = "Restock status and override endpoints")
    )
)]
pub struct RestockApiDoc;

/// Create the product router (list/create/get/update/delete)
pub fn product_router<R: ProductRepository + 'static>(service: Arc<ProductService<R>>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(service)
}

/// Create the restock router (status/override/list)
pub fn restock_router<R: ProductRepository + 'static>(service: Arc<ProductService<R>>) -> Router {
    Router::new()
        .route("/list", get(list_needing_restock))
        .route("/{id}", get(restock_status))
        .route("/update/{id}", put(set_restock_flag))
        .with_state(service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Update a product from a partial payload
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(&id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted".to_string(),
    }))
}

/// Restock status for a product
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Restock",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Restock status", body = RestockStatus),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn restock_status<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<RestockStatus>> {
    let status = service.restock_status(&id).await?;
    Ok(Json(status))
}

/// Override the restock flag
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "Restock",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = RestockOverride,
    responses(
        (status = 200, description = "Restock flag updated", body = Product),
        (status = 400, description = "Unrecognized flag value", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn set_restock_flag<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<RestockOverride>,
) -> ProductResult<Json<Product>> {
    let product = service.set_restock_flag(&id, &input.need_restock).await?;
    Ok(Json(product))
}

/// List products currently flagged for restocking
#[utoipa::path(
    get,
    path = "/list",
    tag = "Restock",
    responses(
        (status = 200, description = "Products needing restock", body = Vec<Product>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_needing_restock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_needing_restock().await?;
    Ok(Json(products))
}
