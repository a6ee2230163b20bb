// src/common/validators.rs

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use validator::{ValidateEmail, ValidationError};

// Apenas dígitos ASCII: "\d" aceitaria dígitos Unicode de outros alfabetos.
static CPF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("regex de CPF válida"));
static CNPJ_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{14}$").expect("regex de CNPJ válida"));
static CEP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("regex de CEP válida"));
static TELEFONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("regex de telefone válida"));

fn format_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// CPF: exatamente 11 dígitos. O dígito verificador não é conferido.
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if CPF_RE.is_match(value) {
        Ok(())
    } else {
        Err(format_error("invalid_cpf", "O CPF deve conter exatamente 11 dígitos."))
    }
}

/// CNPJ: exatamente 14 dígitos.
pub fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if CNPJ_RE.is_match(value) {
        Ok(())
    } else {
        Err(format_error("invalid_cnpj", "O CNPJ deve conter exatamente 14 dígitos."))
    }
}

pub fn validate_cep(value: &str) -> Result<(), ValidationError> {
    if CEP_RE.is_match(value) {
        Ok(())
    } else {
        Err(format_error("invalid_cep", "O CEP deve conter exatamente 8 dígitos."))
    }
}

pub fn validate_telefone(value: &str) -> Result<(), ValidationError> {
    if TELEFONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(format_error("invalid_phone", "O telefone deve conter apenas dígitos."))
    }
}

/// E-mail com sintaxe válida e domínio com pelo menos um ponto
/// ("maria@email" não passa); "localhost" é a única exceção.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let dominio = value.rsplit_once('@').map(|(_, dominio)| dominio).unwrap_or_default();
    let dominio_ok = dominio == "localhost" || dominio.contains('.');

    if value.validate_email() && dominio_ok {
        Ok(())
    } else {
        Err(format_error("invalid_email", "O e-mail informado é inválido."))
    }
}

const ESQUEMAS_SITE: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Site em branco é permitido; qualquer outro valor precisa ser uma URL
/// http(s)/ftp(s) com host.
pub fn validate_site(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let valida = Url::parse(value)
        .map(|url| ESQUEMAS_SITE.contains(&url.scheme()) && url.host_str().is_some())
        .unwrap_or(false);

    if valida {
        Ok(())
    } else {
        Err(format_error("invalid_url", "O site informado não é uma URL válida."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_exige_onze_digitos() {
        assert!(validate_cpf("12345678901").is_ok());
        assert!(validate_cpf("123").is_err());
        assert!(validate_cpf("123456789012").is_err());
        assert!(validate_cpf("123.456.789-01").is_err());
    }

    #[test]
    fn cnpj_exige_quatorze_digitos() {
        assert!(validate_cnpj("12345678000199").is_ok());
        assert!(validate_cnpj("123").is_err());
        assert!(validate_cnpj("12.345.678/0001-99").is_err());
        assert!(validate_cnpj("123456780001990").is_err());
    }

    #[test]
    fn cep_exige_oito_digitos() {
        assert!(validate_cep("74000000").is_ok());
        assert!(validate_cep("74000-000").is_err());
        assert!(validate_cep("123").is_err());
        assert!(validate_cep("740000001").is_err());
    }

    #[test]
    fn telefone_rejeita_letras() {
        assert!(validate_telefone("62999999999").is_ok());
        assert!(validate_telefone("abc123").is_err());
        assert!(validate_telefone("telefone").is_err());
        assert!(validate_telefone("").is_err());
    }

    #[test]
    fn digitos_unicode_nao_sao_aceitos() {
        // "١٢٣" são dígitos arábico-índicos
        assert!(validate_telefone("١٢٣").is_err());
    }

    #[test]
    fn site_vazio_ou_url_valida() {
        assert!(validate_site("").is_ok());
        assert!(validate_site("https://empresa.com").is_ok());

        assert!(validate_site("ftp://arquivos.empresa.com/catalogo").is_ok());

        let err = validate_site("site-invalido").unwrap_err();
        assert_eq!(err.code, "invalid_url");
    }

    #[test]
    fn site_exige_esquema_web_e_host() {
        for site in [
            "empresa.com:8080",
            "javascript:alert(1)",
            "mailto:contato@empresa.com",
            "empresa:com",
            "file:///etc/passwd",
        ] {
            assert!(validate_site(site).is_err(), "{site} deveria ser rejeitado");
        }
    }

    #[test]
    fn email_exige_dominio_com_ponto() {
        assert!(validate_email("maria@email.com").is_ok());
        assert!(validate_email("dev@localhost").is_ok());

        let err = validate_email("maria@email").unwrap_err();
        assert_eq!(err.code, "invalid_email");
        assert!(validate_email("email-invalido").is_err());
        assert!(validate_email("emailinvalido").is_err());
    }
}
