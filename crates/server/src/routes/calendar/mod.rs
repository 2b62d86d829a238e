mod events;
pub use events::*;

mod toggle;
pub use toggle::*;

mod completed;
pub use completed::*;
