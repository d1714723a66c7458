pub mod event;

pub use event::{Event, EventFilter, NewEvent};
