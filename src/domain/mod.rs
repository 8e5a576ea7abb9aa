pub mod effect;
pub mod error;
pub mod model;
pub mod repository;
