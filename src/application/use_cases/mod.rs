/// Use cases module containing application business logic orchestration
mod order_orchestrator;

pub use order_orchestrator::OrderOrchestrator;
