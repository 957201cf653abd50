//! HTTP handlers for the Vendors API

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

use crate::error::VendorResult;
use crate::models::{CreateVendor, CreateVendorBatch, PatchVendor, UpsertVendor, Vendor};
use crate::repository::VendorRepository;
use crate::service::VendorService;

/// OpenAPI documentation for the Vendors API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_vendors,
        create_vendors,
        get_vendor,
        update_vendor,
        patch_vendor,
        delete_vendor,
    ),
    components(
        schemas(
            Vendor, CreateVendor, CreateVendorBatch,
            UpsertVendor, PatchVendor
        ),
        responses(
            NotFoundResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Vendors", description = "Vendor management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the vendors router with all HTTP endpoints
pub fn router<R: VendorRepository + 'static>(service: VendorService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_vendors).post(create_vendors))
        .route(
            "/{id}",
            get(get_vendor)
                .put(update_vendor)
                .patch(patch_vendor)
                .delete(delete_vendor),
        )
        .with_state(shared_service)
}

/// List all vendors
#[utoipa::path(
    get,
    path = "",
    tag = "Vendors",
    responses(
        (status = 200, description = "List of all vendors", body = Vec<Vendor>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_vendors<R: VendorRepository>(
    State(service): State<Arc<VendorService<R>>>,
) -> VendorResult<Json<Vec<Vendor>>> {
    let vendors = service.list_vendors().await?;
    Ok(Json(vendors))
}

/// Create one or more vendors
///
/// Accepts a single vendor object or an array of zero or more objects.
/// Responds once the bulk save completes; per-item outcomes are not reported.
#[utoipa::path(
    post,
    path = "",
    tag = "Vendors",
    request_body = CreateVendorBatch,
    responses(
        (status = 201, description = "Vendors created successfully"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_vendors<R: VendorRepository>(
    State(service): State<Arc<VendorService<R>>>,
    Json(batch): Json<CreateVendorBatch>,
) -> VendorResult<impl IntoResponse> {
    service.create_vendors(batch.into_items()).await?;
    Ok(StatusCode::CREATED)
}

/// Get a vendor by ID
///
/// Responds 200 with the vendor, or 200 with a null body when no record
/// matches; absence of a value is the not-found signal.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Vendors",
    params(
        ("id" = Uuid, Path, description = "Vendor ID")
    ),
    responses(
        (status = 200, description = "The vendor, or null when no record matches", body = Vendor),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_vendor<R: VendorRepository>(
    State(service): State<Arc<VendorService<R>>>,
    UuidPath(id): UuidPath,
) -> VendorResult<Json<Option<Vendor>>> {
    let vendor = service.get_vendor(id).await?;
    Ok(Json(vendor))
}

/// Replace a vendor
///
/// Any id in the payload is overwritten by the path id. Saves with
/// insert-or-replace semantics and returns the saved record.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Vendors",
    params(
        ("id" = Uuid, Path, description = "Vendor ID")
    ),
    request_body = UpsertVendor,
    responses(
        (status = 200, description = "Vendor saved successfully", body = Vendor),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_vendor<R: VendorRepository>(
    State(service): State<Arc<VendorService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<UpsertVendor>,
) -> VendorResult<Json<Vendor>> {
    let vendor = service.update_vendor(id, input).await?;
    Ok(Json(vendor))
}

/// Partially update a vendor
///
/// Compares both name fields independently and writes only when a provided
/// field differs from the stored value.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Vendors",
    params(
        ("id" = Uuid, Path, description = "Vendor ID")
    ),
    request_body = PatchVendor,
    responses(
        (status = 200, description = "Vendor after the patch", body = Vendor),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_vendor<R: VendorRepository>(
    State(service): State<Arc<VendorService<R>>>,
    UuidPath(id): UuidPath,
    Json(patch): Json<PatchVendor>,
) -> VendorResult<Json<Vendor>> {
    let vendor = service.patch_vendor(id, patch).await?;
    Ok(Json(vendor))
}

/// Delete a vendor
///
/// Idempotent: responds 200 whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Vendors",
    params(
        ("id" = Uuid, Path, description = "Vendor ID")
    ),
    responses(
        (status = 200, description = "Vendor deleted (or was already absent)"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_vendor<R: VendorRepository>(
    State(service): State<Arc<VendorService<R>>>,
    UuidPath(id): UuidPath,
) -> VendorResult<impl IntoResponse> {
    service.delete_vendor(id).await?;
    Ok(StatusCode::OK)
}
