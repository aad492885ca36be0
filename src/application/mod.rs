//! Application layer: the forwarding sequence.

pub mod services;
