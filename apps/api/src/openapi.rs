use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "REST API for managing categories and vendors backed by MongoDB"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/categories", api = domain_categories::ApiDoc),
        (path = "/v1/vendors", api = domain_vendors::ApiDoc)
    )
)]
pub struct ApiDoc;
