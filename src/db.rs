// src/db.rs

pub mod memory;
pub mod pessoa_fisica_repo;
pub mod pessoa_juridica_repo;

pub use memory::MemoryStore;
pub use pessoa_fisica_repo::PessoaFisicaRepository;
pub use pessoa_juridica_repo::PessoaJuridicaRepository;

use async_trait::async_trait;

use crate::common::error::AppError;

/// Persistência de uma entidade cadastrável.
///
/// `save` e `insert` nunca validam: quem quiser validar chama `validate()` antes.
/// `list` devolve os registros na ordenação padrão da entidade
/// (`Registro::chave_ordenacao` ascendente, empates pela chave), comparando
/// bytes: o Postgres ordena com `COLLATE "C"` para coincidir com o store em memória.
#[async_trait]
pub trait Store<T>: Send + Sync {
    /// Insere ou atualiza pela chave primária.
    async fn save(&self, registro: &T) -> Result<(), AppError>;

    /// Só insere: chave já existente vira `AppError::AlreadyExists`, de forma atômica.
    async fn insert(&self, registro: &T) -> Result<(), AppError>;

    async fn find(&self, chave: &str) -> Result<Option<T>, AppError>;

    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
