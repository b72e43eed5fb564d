/// Ordering bounded context - pure domain model
///
/// Nothing in here performs I/O; persistence and transactions are reached
/// only through the outbound ports.
pub mod domain;
