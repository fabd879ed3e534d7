pub mod metrics_manager;
pub mod quick_actions;
pub mod random;
pub mod responder;
