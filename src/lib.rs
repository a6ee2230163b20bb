//! Cadastro de pessoas físicas (CPF) e jurídicas (CNPJ): validação de
//! campos, default de país, representação textual e ordenação padrão,
//! expostos por uma API HTTP.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
