/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which the
/// application core talks to infrastructure: dependency sources, renderers,
/// output destinations and progress reporting.
pub mod outbound;
