//! Infrastructure layer: OS-backed event dispatch.

pub mod dispatch;
