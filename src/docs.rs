// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Health ---
        handlers::health::health,

        // --- Pessoas Físicas ---
        handlers::pessoa_fisica::create_pessoa_fisica,
        handlers::pessoa_fisica::list_pessoas_fisicas,
        handlers::pessoa_fisica::get_pessoa_fisica,

        // --- Pessoas Jurídicas ---
        handlers::pessoa_juridica::create_pessoa_juridica,
        handlers::pessoa_juridica::list_pessoas_juridicas,
        handlers::pessoa_juridica::get_pessoa_juridica,
    ),
    components(
        schemas(
            models::PessoaFisica,
            models::NovaPessoaFisica,
            models::PessoaJuridica,
            models::NovaPessoaJuridica,
        )
    ),
    tags(
        (name = "Health", description = "Disponibilidade do serviço"),
        (name = "Pessoas Físicas", description = "Cadastro de pessoas físicas (CPF)"),
        (name = "Pessoas Jurídicas", description = "Cadastro de pessoas jurídicas (CNPJ)")
    )
)]
pub struct ApiDoc;
