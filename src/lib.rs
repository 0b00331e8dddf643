pub mod app;
pub mod assembler;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod image_search;
pub mod llm_client;
pub mod models;
pub mod prompts;
pub mod retry;
pub mod service;

#[cfg(test)]
pub(crate) mod test_utils;
