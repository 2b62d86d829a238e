mod create;
pub use create::*;

mod list;
pub use list::*;

mod delete;
pub use delete::*;

mod import;
pub use import::*;
