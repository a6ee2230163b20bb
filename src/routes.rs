// src/routes.rs

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn router(app_state: AppState) -> Router {
    let pessoas_fisicas_routes = Router::new()
        .route("/"
               ,get(handlers::pessoa_fisica::list_pessoas_fisicas)
               .post(handlers::pessoa_fisica::create_pessoa_fisica)
        )
        .route("/{cpf}"
               ,get(handlers::pessoa_fisica::get_pessoa_fisica)
        );

    let pessoas_juridicas_routes = Router::new()
        .route("/"
               ,get(handlers::pessoa_juridica::list_pessoas_juridicas)
               .post(handlers::pessoa_juridica::create_pessoa_juridica)
        )
        .route("/{cnpj}"
               ,get(handlers::pessoa_juridica::get_pessoa_juridica)
        );

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/pessoas-fisicas", pessoas_fisicas_routes)
        .nest("/api/pessoas-juridicas", pessoas_juridicas_routes)
        .with_state(app_state)
}
