// Core automod module - banned-word matching engine.
// Same layout as the other core modules: models, service, and the pieces the
// service is built from. No Discord types in here.

pub mod automod_models;
pub mod automod_service;
pub mod matcher;
pub mod normalizer;
pub mod pattern_cache;
pub mod term_store;

pub use automod_models::*;
pub use automod_service::*;
pub use term_store::{AutomodError, WordStore};
