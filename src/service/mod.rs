//! Request payload validation and creation orchestration.

mod catalog;
mod validation;
pub use catalog::CatalogService;
pub use validation::{NewConsole, NewGame};
