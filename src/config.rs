// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{MemoryStore, PessoaFisicaRepository, PessoaJuridicaRepository, Store},
    models::{PessoaFisica, PessoaJuridica},
    services::CadastroService,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    /// Sem DATABASE_URL os cadastros ficam em memória.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("DB_MAX_CONNECTIONS inválido ('{}'): {}", value, e))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self { database_url, bind_addr, max_connections })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub pessoas_fisicas: CadastroService<PessoaFisica>,
    pub pessoas_juridicas: CadastroService<PessoaJuridica>,
}

impl AppState {
    /// Conecta ao Postgres, roda as migrações e monta os serviços.
    /// Sem banco configurado, usa stores em memória.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let Some(database_url) = &config.database_url else {
            tracing::warn!("⚠️ DATABASE_URL não definida: os cadastros ficarão apenas em memória.");
            return Ok(Self::in_memory());
        };

        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        sqlx::migrate!().run(&db_pool).await?;
        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        let pf_repo: Arc<dyn Store<PessoaFisica>> = Arc::new(PessoaFisicaRepository::new(db_pool.clone()));
        let pj_repo: Arc<dyn Store<PessoaJuridica>> = Arc::new(PessoaJuridicaRepository::new(db_pool));

        Ok(Self {
            pessoas_fisicas: CadastroService::new(pf_repo),
            pessoas_juridicas: CadastroService::new(pj_repo),
        })
    }

    pub fn in_memory() -> Self {
        let pf_store: Arc<dyn Store<PessoaFisica>> = Arc::new(MemoryStore::<PessoaFisica>::new());
        let pj_store: Arc<dyn Store<PessoaJuridica>> = Arc::new(MemoryStore::<PessoaJuridica>::new());

        Self {
            pessoas_fisicas: CadastroService::new(pf_store),
            pessoas_juridicas: CadastroService::new(pj_store),
        }
    }
}
