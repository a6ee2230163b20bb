// src/db/memory.rs

use std::collections::{btree_map::Entry, BTreeMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{common::error::AppError, db::Store, models::Registro};

/// Store em memória, indexado pela chave primária.
/// Usado quando não há DATABASE_URL e nos testes.
pub struct MemoryStore<T> {
    registros: RwLock<BTreeMap<String, T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self { registros: RwLock::new(BTreeMap::new()) }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Registro> Store<T> for MemoryStore<T> {
    async fn save(&self, registro: &T) -> Result<(), AppError> {
        self.registros
            .write()
            .await
            .insert(registro.chave().to_string(), registro.clone());
        Ok(())
    }

    async fn insert(&self, registro: &T) -> Result<(), AppError> {
        let mut registros = self.registros.write().await;
        match registros.entry(registro.chave().to_string()) {
            Entry::Occupied(_) => Err(AppError::AlreadyExists {
                entidade: T::ENTIDADE,
                chave: registro.chave().to_string(),
            }),
            Entry::Vacant(vaga) => {
                vaga.insert(registro.clone());
                Ok(())
            }
        }
    }

    async fn find(&self, chave: &str) -> Result<Option<T>, AppError> {
        Ok(self.registros.read().await.get(chave).cloned())
    }

    async fn list(&self) -> Result<Vec<T>, AppError> {
        // O BTreeMap já itera pela chave; o sort estável mantém isso nos empates.
        let mut registros: Vec<T> = self.registros.read().await.values().cloned().collect();
        registros.sort_by(|a, b| a.chave_ordenacao().cmp(b.chave_ordenacao()));
        Ok(registros)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = self.registros.read().await.len();
        i64::try_from(total).map_err(|e| AppError::InternalServerError(e.into()))
    }
}
