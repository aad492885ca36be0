//! Core domain types: the link event, the outbound wire formats, and the
//! dispatcher seam.

pub mod dispatch;
pub mod link_event;
pub mod wire;
