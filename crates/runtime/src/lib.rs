pub mod event_bus;
pub mod events;
pub mod frame;

pub use event_bus::*;
pub use events::*;
pub use frame::*;
