// src/db/pessoa_fisica_repo.rs

use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, Postgres},
    query::Query,
    PgPool,
};

use crate::{common::error::AppError, db::Store, models::PessoaFisica};

const COLUNAS: &str = "cpf, nome_completo, data_nascimento, rg, email, telefone_principal, \
     cep, logradouro, numero, bairro, cidade, estado, pais, complemento";

// Responsável por todas as interações com a tabela 'pessoas_fisicas'
#[derive(Clone)]
pub struct PessoaFisicaRepository {
    pool: PgPool,
}

impl PessoaFisicaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<PessoaFisica> for PessoaFisicaRepository {
    /// Upsert pelo CPF. `pais` é gravado como veio: o default já foi resolvido na construção.
    async fn save(&self, pessoa: &PessoaFisica) -> Result<(), AppError> {
        let sql = format!(
            r#"
            INSERT INTO pessoas_fisicas ({COLUNAS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (cpf) DO UPDATE SET
                nome_completo = EXCLUDED.nome_completo,
                data_nascimento = EXCLUDED.data_nascimento,
                rg = EXCLUDED.rg,
                email = EXCLUDED.email,
                telefone_principal = EXCLUDED.telefone_principal,
                cep = EXCLUDED.cep,
                logradouro = EXCLUDED.logradouro,
                numero = EXCLUDED.numero,
                bairro = EXCLUDED.bairro,
                cidade = EXCLUDED.cidade,
                estado = EXCLUDED.estado,
                pais = EXCLUDED.pais,
                complemento = EXCLUDED.complemento,
                updated_at = NOW()
            "#
        );
        let query = sqlx::query(&sql);

        bind_pessoa(query, pessoa)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// INSERT puro; violação da chave primária vira `AlreadyExists`.
    async fn insert(&self, pessoa: &PessoaFisica) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO pessoas_fisicas ({COLUNAS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
        );

        bind_pessoa(sqlx::query(&sql), pessoa)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::AlreadyExists {
                            entidade: "PessoaFisica",
                            chave: pessoa.cpf.clone(),
                        };
                    }
                }
                e.into()
            })?;

        Ok(())
    }

    async fn find(&self, cpf: &str) -> Result<Option<PessoaFisica>, AppError> {
        let pessoa = sqlx::query_as::<_, PessoaFisica>(&format!(
            "SELECT {COLUNAS} FROM pessoas_fisicas WHERE cpf = $1"
        ))
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pessoa)
    }

    async fn list(&self) -> Result<Vec<PessoaFisica>, AppError> {
        let pessoas = sqlx::query_as::<_, PessoaFisica>(&format!(
            r#"SELECT {COLUNAS} FROM pessoas_fisicas ORDER BY nome_completo COLLATE "C" ASC, cpf ASC"#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(pessoas)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pessoas_fisicas")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

// Mesma ordem de colunas de COLUNAS.
fn bind_pessoa<'q>(
    query: Query<'q, Postgres, PgArguments>,
    pessoa: &'q PessoaFisica,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(&pessoa.cpf)
        .bind(&pessoa.nome_completo)
        .bind(pessoa.data_nascimento)
        .bind(&pessoa.rg)
        .bind(&pessoa.email)
        .bind(&pessoa.telefone_principal)
        .bind(&pessoa.cep)
        .bind(&pessoa.logradouro)
        .bind(&pessoa.numero)
        .bind(&pessoa.bairro)
        .bind(&pessoa.cidade)
        .bind(&pessoa.estado)
        .bind(&pessoa.pais)
        .bind(&pessoa.complemento)
}
