// src/handlers/pessoa_juridica.rs

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
    models::{NovaPessoaJuridica, PessoaJuridica},
};

// POST /api/pessoas-juridicas
#[utoipa::path(
    post,
    path = "/api/pessoas-juridicas",
    tag = "Pessoas Jurídicas",
    request_body = NovaPessoaJuridica,
    responses(
        (status = 201, description = "Pessoa jurídica cadastrada", body = Registrado<PessoaJuridica>),
        (status = 400, description = "Um ou mais campos inválidos"),
        (status = 409, description = "CNPJ já cadastrado")
    )
)]
pub async fn create_pessoa_juridica(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NovaPessoaJuridica>,
) -> Result<impl IntoResponse, ApiError> {
    let empresa = PessoaJuridica::from(payload);

    let empresa = app_state
        .pessoas_juridicas
        .register(empresa)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(Registrado::from(empresa))))
}

// GET /api/pessoas-juridicas
#[utoipa::path(
    get,
    path = "/api/pessoas-juridicas",
    tag = "Pessoas Jurídicas",
    responses(
        (status = 200, description = "Pessoas jurídicas ordenadas por razão social", body = [Registrado<PessoaJuridica>])
    )
)]
pub async fn list_pessoas_juridicas(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let empresas = app_state
        .pessoas_juridicas
        .list()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    let body: Vec<Registrado<PessoaJuridica>> = empresas.into_iter().map(Registrado::from).collect();
    Ok((StatusCode::OK, Json(body)))
}

// GET /api/pessoas-juridicas/{cnpj}
#[utoipa::path(
    get,
    path = "/api/pessoas-juridicas/{cnpj}",
    tag = "Pessoas Jurídicas",
    params(("cnpj" = String, Path, description = "CNPJ, 14 dígitos")),
    responses(
        (status = 200, description = "Pessoa jurídica encontrada", body = Registrado<PessoaJuridica>),
        (status = 404, description = "CNPJ não cadastrado")
    )
)]
pub async fn get_pessoa_juridica(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(cnpj): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let empresa = app_state
        .pessoas_juridicas
        .find(&cnpj)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(Registrado::from(empresa))))
}
