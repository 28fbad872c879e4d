/// Ports module defining the interfaces between the application core and
/// infrastructure (hexagonal architecture).
pub mod outbound;
