// src/db/pessoa_juridica_repo.rs

use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, Postgres},
    query::Query,
    PgPool,
};

use crate::{common::error::AppError, db::Store, models::PessoaJuridica};

const COLUNAS: &str = "cnpj, razao_social, nome_fantasia, data_abertura, email_comercial, \
     telefone_principal, inscricao_estadual, logradouro, bairro, estado, numero, pais, site, complemento";

#[derive(Clone)]
pub struct PessoaJuridicaRepository {
    pool: PgPool,
}

impl PessoaJuridicaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<PessoaJuridica> for PessoaJuridicaRepository {
    async fn save(&self, empresa: &PessoaJuridica) -> Result<(), AppError> {
        let sql = format!(
            r#"
            INSERT INTO pessoas_juridicas ({COLUNAS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (cnpj) DO UPDATE SET
                razao_social = EXCLUDED.razao_social,
                nome_fantasia = EXCLUDED.nome_fantasia,
                data_abertura = EXCLUDED.data_abertura,
                email_comercial = EXCLUDED.email_comercial,
                telefone_principal = EXCLUDED.telefone_principal,
                inscricao_estadual = EXCLUDED.inscricao_estadual,
                logradouro = EXCLUDED.logradouro,
                bairro = EXCLUDED.bairro,
                estado = EXCLUDED.estado,
                numero = EXCLUDED.numero,
                pais = EXCLUDED.pais,
                site = EXCLUDED.site,
                complemento = EXCLUDED.complemento,
                updated_at = NOW()
            "#
        );
        let query = sqlx::query(&sql);

        bind_empresa(query, empresa)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// INSERT puro; violação da chave primária vira `AlreadyExists`.
    async fn insert(&self, empresa: &PessoaJuridica) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO pessoas_juridicas ({COLUNAS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
        );

        bind_empresa(sqlx::query(&sql), empresa)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::AlreadyExists {
                            entidade: "PessoaJuridica",
                            chave: empresa.cnpj.clone(),
                        };
                    }
                }
                e.into()
            })?;

        Ok(())
    }

    async fn find(&self, cnpj: &str) -> Result<Option<PessoaJuridica>, AppError> {
        let empresa = sqlx::query_as::<_, PessoaJuridica>(&format!(
            "SELECT {COLUNAS} FROM pessoas_juridicas WHERE cnpj = $1"
        ))
        .bind(cnpj)
        .fetch_optional(&self.pool)
        .await?;

        Ok(empresa)
    }

    async fn list(&self) -> Result<Vec<PessoaJuridica>, AppError> {
        let empresas = sqlx::query_as::<_, PessoaJuridica>(&format!(
            r#"SELECT {COLUNAS} FROM pessoas_juridicas ORDER BY razao_social COLLATE "C" ASC, cnpj ASC"#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(empresas)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pessoas_juridicas")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

// Mesma ordem de colunas de COLUNAS.
fn bind_empresa<'q>(
    query: Query<'q, Postgres, PgArguments>,
    empresa: &'q PessoaJuridica,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(&empresa.cnpj)
        .bind(&empresa.razao_social)
        .bind(&empresa.nome_fantasia)
        .bind(empresa.data_abertura)
        .bind(&empresa.email_comercial)
        .bind(&empresa.telefone_principal)
        .bind(&empresa.inscricao_estadual)
        .bind(&empresa.logradouro)
        .bind(&empresa.bairro)
        .bind(&empresa.estado)
        .bind(&empresa.numero)
        .bind(&empresa.pais)
        .bind(&empresa.site)
        .bind(&empresa.complemento)
}
