pub mod forward_service;

pub use forward_service::{DispatchOutcome, ForwardService};
