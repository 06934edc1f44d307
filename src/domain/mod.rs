// Domain models (business entities)
// Pure Rust, no framework dependencies
pub mod models;
