/// Application layer - Use cases, DTOs and read models
///
/// Orchestrates the license resolution services and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
