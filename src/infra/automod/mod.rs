// Automod infra layer.
// - `json_store.rs` persists the banned-word list to a JSON file.
// - `in_memory.rs` keeps it in memory (tests).

pub mod json_store;

#[cfg(test)]
pub mod in_memory;

pub use json_store::JsonWordStore;

#[cfg(test)]
pub use in_memory::InMemoryWordStore;
