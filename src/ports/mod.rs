/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// application core depends on. The CLI drives use cases directly.
pub mod outbound;
