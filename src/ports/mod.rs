/// Ports - trait boundaries between the application core and the outside
///
/// Inbound ports are what drivers (the CLI) call; outbound ports are what
/// the core needs from storage and presentation.
pub mod inbound;
pub mod outbound;
