use axum::Router;
use domain_categories::{CategoryService, MongoCategoryRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoCategoryRepository::new(&state.db);
    let service = CategoryService::new(repository);
    handlers::router(service)
}
