// src/models/mod.rs

pub mod pessoa_fisica;
pub mod pessoa_juridica;

pub use pessoa_fisica::{NovaPessoaFisica, PessoaFisica};
pub use pessoa_juridica::{NovaPessoaJuridica, PessoaJuridica};

use std::fmt;

use validator::Validate;

/// País usado quando o campo `pais` é omitido na criação.
pub const PAIS_PADRAO: &str = "Brasil";

/// Resolve o default de `pais`: só a omissão (`None`) vira "Brasil".
/// Uma string vazia informada explicitamente é preservada.
pub fn resolve_pais(pais: Option<String>) -> String {
    pais.unwrap_or_else(|| PAIS_PADRAO.to_string())
}

/// O que um store precisa saber sobre uma entidade cadastrável.
/// `Display` é a representação "{nome} - {documento}".
pub trait Registro: Validate + Clone + fmt::Display + Send + Sync + 'static {
    /// Nome da entidade, usado em logs e mensagens de erro.
    const ENTIDADE: &'static str;

    /// Chave primária (CPF ou CNPJ).
    fn chave(&self) -> &str;

    /// Campo da ordenação padrão da coleção.
    fn chave_ordenacao(&self) -> &str;
}
