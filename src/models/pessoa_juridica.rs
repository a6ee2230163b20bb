// src/models/pessoa_juridica.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validators::{validate_cnpj, validate_email, validate_site, validate_telefone};
use crate::models::{resolve_pais, Registro};

// Mapeia a tabela pessoas_juridicas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PessoaJuridica {
    #[validate(custom(function = "validate_cnpj"))]
    #[schema(example = "12345678000199")]
    pub cnpj: String,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Empresa X LTDA")]
    pub razao_social: String,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Empresa X")]
    pub nome_fantasia: String,

    #[schema(example = "2000-01-01")]
    pub data_abertura: NaiveDate,

    #[validate(custom(function = "validate_email"), length(max = 254))]
    #[schema(example = "contato@empresa.com")]
    pub email_comercial: String,

    #[validate(length(max = 20), custom(function = "validate_telefone"))]
    pub telefone_principal: String,

    #[validate(length(min = 1, max = 20))]
    pub inscricao_estadual: String,

    // --- Endereço ---
    #[validate(length(min = 1, max = 255))]
    pub logradouro: String,

    #[validate(length(min = 1, max = 100))]
    pub bairro: String,

    #[validate(length(min = 1, max = 2))]
    pub estado: String,

    #[validate(length(min = 1, max = 10))]
    pub numero: String,

    #[validate(length(max = 50))]
    pub pais: String,

    // "" é aceito; None também.
    #[validate(length(max = 200), custom(function = "validate_site"))]
    #[schema(example = "https://empresa.com")]
    pub site: Option<String>,

    #[validate(length(max = 255))]
    pub complemento: Option<String>,
}

impl fmt::Display for PessoaJuridica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.razao_social, self.cnpj)
    }
}

impl Registro for PessoaJuridica {
    const ENTIDADE: &'static str = "PessoaJuridica";

    fn chave(&self) -> &str {
        &self.cnpj
    }

    fn chave_ordenacao(&self) -> &str {
        &self.razao_social
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovaPessoaJuridica {
    #[schema(example = "12345678000199")]
    pub cnpj: String,
    #[schema(example = "Empresa X LTDA")]
    pub razao_social: String,
    pub nome_fantasia: String,
    #[schema(example = "2000-01-01")]
    pub data_abertura: NaiveDate,
    pub email_comercial: String,
    pub telefone_principal: String,
    pub inscricao_estadual: String,
    pub logradouro: String,
    pub bairro: String,
    pub estado: String,
    pub numero: String,
    // Ausente -> "Brasil"; "" é mantido.
    #[serde(default)]
    pub pais: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
}

impl From<NovaPessoaJuridica> for PessoaJuridica {
    fn from(nova: NovaPessoaJuridica) -> Self {
        Self {
            cnpj: nova.cnpj,
            razao_social: nova.razao_social,
            nome_fantasia: nova.nome_fantasia,
            data_abertura: nova.data_abertura,
            email_comercial: nova.email_comercial,
            telefone_principal: nova.telefone_principal,
            inscricao_estadual: nova.inscricao_estadual,
            logradouro: nova.logradouro,
            bairro: nova.bairro,
            estado: nova.estado,
            numero: nova.numero,
            pais: resolve_pais(nova.pais),
            site: nova.site,
            complemento: nova.complemento,
        }
    }
}
