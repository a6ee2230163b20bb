pub mod health;
pub mod pessoa_fisica;
pub mod pessoa_juridica;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Registro;

/// Corpo de resposta: o registro mais a sua representação textual.
#[derive(Debug, Serialize, ToSchema)]
pub struct Registrado<T> {
    #[serde(flatten)]
    pub registro: T,
    #[schema(example = "Maria da Silva - 12345678901")]
    pub descricao: String,
}

impl<T: Registro> From<T> for Registrado<T> {
    fn from(registro: T) -> Self {
        let descricao = registro.to_string();
        Self { registro, descricao }
    }
}
