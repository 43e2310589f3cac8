//! Mining lifecycle events.
//! Handler trait with no-op defaults, payload types, and a synchronous dispatcher.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::MiningEventHandler;
pub use types::*;
