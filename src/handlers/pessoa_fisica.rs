// src/handlers/pessoa_fisica.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    handlers::Registrado,
    middleware::i18n::Locale,
    models::{NovaPessoaFisica, PessoaFisica},
};

// POST /api/pessoas-fisicas
#[utoipa::path(
    post,
    path = "/api/pessoas-fisicas",
    tag = "Pessoas Físicas",
    request_body = NovaPessoaFisica,
    responses(
        (status = 201, description = "Pessoa física cadastrada", body = Registrado<PessoaFisica>),
        (status = 400, description = "Um ou mais campos inválidos"),
        (status = 409, description = "CPF já cadastrado")
    )
)]
pub async fn create_pessoa_fisica(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NovaPessoaFisica>,
) -> Result<impl IntoResponse, ApiError> {
    // O default de `pais` é resolvido aqui, na construção.
    let pessoa = PessoaFisica::from(payload);

    let pessoa = app_state
        .pessoas_fisicas
        .register(pessoa)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(Registrado::from(pessoa))))
}

// GET /api/pessoas-fisicas
#[utoipa::path(
    get,
    path = "/api/pessoas-fisicas",
    tag = "Pessoas Físicas",
    responses(
        (status = 200, description = "Pessoas físicas ordenadas por nome completo", body = [Registrado<PessoaFisica>])
    )
)]
pub async fn list_pessoas_fisicas(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let pessoas = app_state
        .pessoas_fisicas
        .list()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    let body: Vec<Registrado<PessoaFisica>> = pessoas.into_iter().map(Registrado::from).collect();
    Ok((StatusCode::OK, Json(body)))
}

// GET /api/pessoas-fisicas/{cpf}
#[utoipa::path(
    get,
    path = "/api/pessoas-fisicas/{cpf}",
    tag = "Pessoas Físicas",
    params(("cpf" = String, Path, description = "CPF, 11 dígitos")),
    responses(
        (status = 200, description = "Pessoa física encontrada", body = Registrado<PessoaFisica>),
        (status = 404, description = "CPF não cadastrado")
    )
)]
pub async fn get_pessoa_fisica(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(cpf): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pessoa = app_state
        .pessoas_fisicas
        .find(&cpf)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(Registrado::from(pessoa))))
}
