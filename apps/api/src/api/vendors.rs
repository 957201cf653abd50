use axum::Router;
use domain_vendors::{MongoVendorRepository, VendorService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoVendorRepository::new(&state.db);
    let service = VendorService::new(repository);
    handlers::router(service)
}
