pub mod memory_store;
pub mod state_store;
