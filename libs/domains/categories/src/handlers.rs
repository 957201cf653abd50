//! HTTP handlers for the Categories API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath,
    errors::responses::{BadRequestUuidResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, CreateCategoryBatch, PatchCategory, UpsertCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_categories,
        get_category,
        update_category,
        patch_category,
        delete_category,
    ),
    components(
        schemas(
            Category, CreateCategory, CreateCategoryBatch,
            UpsertCategory, PatchCategory
        ),
        responses(
            NotFoundResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Categories", description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the categories router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_categories))
        .route(
            "/{id}",
            get(get_category)
                .put(update_category)
                .patch(patch_category)
                .delete(delete_category),
        )
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "List of all categories", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CategoryResult<Json<Vec<Category>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Create one or more categories
///
/// Accepts a single category object or an array of zero or more objects.
/// Responds once the bulk save completes; per-item outcomes are not reported.
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategoryBatch,
    responses(
        (status = 201, description = "Categories created successfully"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Json(batch): Json<CreateCategoryBatch>,
) -> CategoryResult<impl IntoResponse> {
    service.create_categories(batch.into_items()).await?;
    Ok(StatusCode::CREATED)
}

/// Get a category by ID
///
/// Responds 200 with the category, or 200 with a null body when no record
/// matches; absence of a value is the not-found signal.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "The category, or null when no record matches", body = Category),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> CategoryResult<Json<Option<Category>>> {
    let category = service.get_category(id).await?;
    Ok(Json(category))
}

/// Replace a category
///
/// Any id in the payload is overwritten by the path id. Saves with
/// insert-or-replace semantics and returns the saved record.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpsertCategory,
    responses(
        (status = 200, description = "Category saved successfully", body = Category),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<UpsertCategory>,
) -> CategoryResult<Json<Category>> {
    let category = service.update_category(id, input).await?;
    Ok(Json(category))
}

/// Partially update a category
///
/// Writes only when a provided field differs from the stored value.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = PatchCategory,
    responses(
        (status = 200, description = "Category after the patch", body = Category),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
    Json(patch): Json<PatchCategory>,
) -> CategoryResult<Json<Category>> {
    let category = service.patch_category(id, patch).await?;
    Ok(Json(category))
}

/// Delete a category
///
/// Idempotent: responds 200 whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted (or was already absent)"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> CategoryResult<impl IntoResponse> {
    service.delete_category(id).await?;
    Ok(StatusCode::OK)
}
