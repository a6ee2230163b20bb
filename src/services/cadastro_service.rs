// src/services/cadastro_service.rs

use std::sync::Arc;

use crate::{common::error::AppError, db::Store, models::Registro};

/// Regras de cadastro comuns às duas entidades.
pub struct CadastroService<T> {
    store: Arc<dyn Store<T>>,
}

// Clone manual: o derive exigiria `T: Clone` sem necessidade.
impl<T> Clone for CadastroService<T> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<T: Registro> CadastroService<T> {
    pub fn new(store: Arc<dyn Store<T>>) -> Self {
        Self { store }
    }

    /// Valida todos os campos e insere; chave repetida vira `AlreadyExists`.
    pub async fn register(&self, registro: T) -> Result<T, AppError> {
        if let Err(errors) = registro.validate() {
            tracing::debug!("{} inválida ({}): {}", T::ENTIDADE, registro.chave(), errors);
            return Err(AppError::ValidationError(errors));
        }

        self.store.insert(&registro).await?;
        tracing::info!("✅ {} cadastrada: {}", T::ENTIDADE, registro);

        Ok(registro)
    }

    pub async fn find(&self, chave: &str) -> Result<T, AppError> {
        self.store.find(chave).await?.ok_or_else(|| AppError::NotFound {
            entidade: T::ENTIDADE,
            chave: chave.to_string(),
        })
    }

    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        self.store.list().await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::db::MemoryStore;
    use crate::models::pessoa_fisica::tests::maria;
    use crate::models::pessoa_juridica::tests::empresa_x;
    use crate::models::{PessoaFisica, PessoaJuridica};

    fn service_pf() -> CadastroService<PessoaFisica> {
        CadastroService::new(Arc::new(MemoryStore::<PessoaFisica>::new()))
    }

    // Atrasa cada ida ao store, como um round-trip de banco, para intercalar as tarefas.
    struct StoreLento(MemoryStore<PessoaFisica>);

    #[async_trait::async_trait]
    impl Store<PessoaFisica> for StoreLento {
        async fn save(&self, registro: &PessoaFisica) -> Result<(), AppError> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.0.save(registro).await
        }

        async fn insert(&self, registro: &PessoaFisica) -> Result<(), AppError> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.0.insert(registro).await
        }

        async fn find(&self, chave: &str) -> Result<Option<PessoaFisica>, AppError> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.0.find(chave).await
        }

        async fn list(&self) -> Result<Vec<PessoaFisica>, AppError> {
            self.0.list().await
        }

        async fn count(&self) -> Result<i64, AppError> {
            self.0.count().await
        }
    }

    fn service_pj() -> CadastroService<PessoaJuridica> {
        CadastroService::new(Arc::new(MemoryStore::<PessoaJuridica>::new()))
    }

    #[tokio::test]
    async fn register_salva_registro_valido() {
        let service = service_pf();
        let salvo = service.register(maria()).await.unwrap();

        assert_eq!(salvo.to_string(), "Maria da Silva - 12345678901");
        assert_eq!(service.count().await.unwrap(), 1);
        assert_eq!(service.find("12345678901").await.unwrap(), salvo);
    }

    #[tokio::test]
    async fn register_nao_salva_registro_invalido() {
        let service = service_pj();
        let mut pj = empresa_x();
        pj.site = Some("site-invalido".into());

        let err = service.register(pj).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.field_codes()["site"], vec!["invalid_url"]);
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn register_recusa_chave_repetida() {
        let service = service_pj();
        service.register(empresa_x()).await.unwrap();

        let err = service.register(empresa_x()).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists { chave, .. } if chave == "12345678000199"));
    }

    #[tokio::test]
    async fn cadastros_simultaneos_com_mesmo_cpf() {
        let service: CadastroService<PessoaFisica> =
            CadastroService::new(Arc::new(StoreLento(MemoryStore::new())));
        let mut outra = maria();
        outra.email = "outra@email.com".into();

        let (r1, r2) = tokio::join!(service.register(maria()), service.register(outra));

        // Exatamente um vence; o outro recebe conflito e nada é sobrescrito.
        assert_eq!(r1.is_ok() as u8 + r2.is_ok() as u8, 1);
        let perdedor = if r1.is_ok() { r2 } else { r1 };
        assert!(matches!(perdedor, Err(AppError::AlreadyExists { .. })));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn register_nao_sobrescreve_registro_existente() {
        let service = service_pf();
        service.register(maria()).await.unwrap();

        let mut outra = maria();
        outra.email = "outra@email.com".into();
        assert!(service.register(outra).await.is_err());

        assert_eq!(service.find("12345678901").await.unwrap().email, "maria@email.com");
    }

    #[tokio::test]
    async fn find_inexistente_e_not_found() {
        let err = service_pf().find("00000000000").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entidade: "PessoaFisica", .. }));
    }
}
