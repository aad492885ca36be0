//! Dispatcher implementations.

pub mod null_dispatcher;
pub mod system_dispatcher;

pub use null_dispatcher::NullDispatcher;
pub use system_dispatcher::SystemDispatcher;
