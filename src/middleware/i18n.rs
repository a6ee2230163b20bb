// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

/// Idioma preferido do cliente, extraído do cabeçalho `Accept-Language`.
/// Só "pt" e "en" têm mensagens; qualquer outro cai para português.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    pub const DEFAULT: &'static str = "pt";

    pub fn from_header(header_str: &str) -> Self {
        // "pt-BR" -> "pt", "en" -> "en"
        let lang = accept_language::parse(header_str)
            .iter()
            .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            .find(|primary| primary == "pt" || primary == "en")
            .unwrap_or_else(|| Self::DEFAULT.to_string());

        Locale(lang)
    }

    pub fn is_english(&self) -> bool {
        self.0 == "en"
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale(Self::DEFAULT.to_string())
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default();

        Ok(locale)
    }
}
