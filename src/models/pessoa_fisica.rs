// src/models/pessoa_fisica.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validators::{validate_cep, validate_cpf, validate_email, validate_telefone};
use crate::models::{resolve_pais, Registro};

// --- ENTIDADE ---

// Mapeia a tabela pessoas_fisicas. A validação é explícita (`validate()`):
// nem a construção nem o save a disparam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PessoaFisica {
    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "12345678901")]
    pub cpf: String,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Maria da Silva")]
    pub nome_completo: String,

    #[schema(example = "1990-05-10")]
    pub data_nascimento: NaiveDate,

    #[validate(length(min = 1, max = 20))]
    pub rg: String,

    #[validate(custom(function = "validate_email"), length(max = 254))]
    #[schema(example = "maria@email.com")]
    pub email: String,

    #[validate(length(max = 20), custom(function = "validate_telefone"))]
    #[schema(example = "62999999999")]
    pub telefone_principal: String,

    // --- Endereço ---
    #[validate(custom(function = "validate_cep"))]
    #[schema(example = "74000000")]
    pub cep: String,

    #[validate(length(min = 1, max = 255))]
    pub logradouro: String,

    #[validate(length(min = 1, max = 10))]
    pub numero: String,

    #[validate(length(min = 1, max = 100))]
    pub bairro: String,

    #[validate(length(min = 1, max = 100))]
    pub cidade: String,

    #[validate(length(min = 1, max = 2))]
    #[schema(example = "GO")]
    pub estado: String,

    // Pode ser "" se o cliente mandou vazio de propósito.
    #[validate(length(max = 50))]
    pub pais: String,

    // Opcional: None e "" são igualmente válidos.
    #[validate(length(max = 255))]
    pub complemento: Option<String>,
}

impl fmt::Display for PessoaFisica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.nome_completo, self.cpf)
    }
}

impl Registro for PessoaFisica {
    const ENTIDADE: &'static str = "PessoaFisica";

    fn chave(&self) -> &str {
        &self.cpf
    }

    fn chave_ordenacao(&self) -> &str {
        &self.nome_completo
    }
}

// --- CRIAÇÃO ---

/// Dados de criação. Difere da entidade apenas em `pais`:
/// `None` (campo ausente) recebe o default, `Some("")` não.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovaPessoaFisica {
    #[schema(example = "12345678901")]
    pub cpf: String,
    #[schema(example = "Maria da Silva")]
    pub nome_completo: String,
    #[schema(example = "1990-05-10")]
    pub data_nascimento: NaiveDate,
    pub rg: String,
    #[schema(example = "maria@email.com")]
    pub email: String,
    pub telefone_principal: String,
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    #[serde(default)]
    pub pais: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
}

impl From<NovaPessoaFisica> for PessoaFisica {
    fn from(nova: NovaPessoaFisica) -> Self {
        Self {
            cpf: nova.cpf,
            nome_completo: nova.nome_completo,
            data_nascimento: nova.data_nascimento,
            rg: nova.rg,
            email: nova.email,
            telefone_principal: nova.telefone_principal,
            cep: nova.cep,
            logradouro: nova.logradouro,
            numero: nova.numero,
            bairro: nova.bairro,
            cidade: nova.cidade,
            estado: nova.estado,
            pais: resolve_pais(nova.pais),
            complemento: nova.complemento,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn nova_maria() -> NovaPessoaFisica {
        NovaPessoaFisica {
            cpf: "12345678901".into(),
            nome_completo: "Maria da Silva".into(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 5, 10).unwrap(),
            rg: "1234567".into(),
            email: "maria@email.com".into(),
            telefone_principal: "62999999999".into(),
            cep: "74000000".into(),
            logradouro: "Rua Central".into(),
            numero: "100".into(),
            bairro: "Centro".into(),
            cidade: "Goiânia".into(),
            estado: "GO".into(),
            pais: Some("Brasil".into()),
            complemento: Some("Apto 12".into()),
        }
    }

    pub(crate) fn maria() -> PessoaFisica {
        nova_maria().into()
    }

    fn campos_invalidos(pf: &PessoaFisica) -> Vec<String> {
        let errors = pf.validate().unwrap_err();
        let mut campos: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        campos.sort();
        campos
    }

    #[test]
    fn pessoa_valida_passa_na_validacao() {
        assert!(maria().validate().is_ok());
    }

    #[test]
    fn str_pessoa_fisica() {
        assert_eq!(maria().to_string(), "Maria da Silva - 12345678901");
    }

    #[test]
    fn cpf_invalido() {
        let mut pf = maria();
        pf.cpf = "123".into();
        assert_eq!(campos_invalidos(&pf), vec!["cpf"]);
    }

    #[test]
    fn cep_invalido() {
        let mut pf = maria();
        pf.cep = "123".into();
        assert_eq!(campos_invalidos(&pf), vec!["cep"]);
    }

    #[test]
    fn email_invalido() {
        let mut pf = maria();
        pf.email = "email-invalido".into();
        let errors = pf.validate().unwrap_err();
        assert_eq!(errors.field_errors()["email"][0].code, "invalid_email");
    }

    #[test]
    fn telefone_invalido() {
        let mut pf = maria();
        pf.telefone_principal = "abc123".into();
        assert_eq!(campos_invalidos(&pf), vec!["telefone_principal"]);
    }

    #[test]
    fn complemento_pode_ser_vazio() {
        let mut pf = maria();
        pf.complemento = Some(String::new());
        assert!(pf.validate().is_ok());
    }

    #[test]
    fn complemento_pode_ser_null() {
        let mut pf = maria();
        pf.complemento = None;
        assert!(pf.validate().is_ok());
    }

    #[test]
    fn nome_completo_vazio_e_rejeitado() {
        let mut pf = maria();
        pf.nome_completo = String::new();
        assert_eq!(campos_invalidos(&pf), vec!["nome_completo"]);
    }

    #[test]
    fn todos_os_campos_invalidos_sao_reportados() {
        let mut pf = maria();
        pf.cpf = "123".into();
        pf.cep = "1".into();
        pf.email = "sem-arroba".into();
        pf.telefone_principal = "abc".into();

        assert_eq!(campos_invalidos(&pf), vec!["cep", "cpf", "email", "telefone_principal"]);
    }

    #[test]
    fn pais_omitido_recebe_default() {
        let mut nova = nova_maria();
        nova.pais = None;
        assert_eq!(PessoaFisica::from(nova).pais, "Brasil");
    }

    #[test]
    fn pais_vazio_nao_recebe_default() {
        let mut nova = nova_maria();
        nova.pais = Some(String::new());
        assert_eq!(PessoaFisica::from(nova).pais, "");
    }

    #[test]
    fn json_sem_pais_recebe_default_e_json_vazio_nao() {
        let mut body = serde_json::json!({
            "cpf": "11111111111",
            "nomeCompleto": "Ana Souza",
            "dataNascimento": "1980-01-01",
            "rg": "1111",
            "email": "ana@email.com",
            "telefonePrincipal": "62900000000",
            "cep": "74000000",
            "logradouro": "Rua 1",
            "numero": "1",
            "bairro": "Centro",
            "cidade": "Goiânia",
            "estado": "GO"
        });

        let omitido: NovaPessoaFisica = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(PessoaFisica::from(omitido).pais, "Brasil");

        body["pais"] = serde_json::json!("");
        let vazio: NovaPessoaFisica = serde_json::from_value(body).unwrap();
        assert_eq!(PessoaFisica::from(vazio).pais, "");
    }
}
