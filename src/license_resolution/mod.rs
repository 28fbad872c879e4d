/// License resolution domain layer
///
/// Pure domain logic with no I/O: expression normalization, component
/// aggregation, and report assembly.
pub mod domain;
pub mod services;
