pub mod generate;
pub mod health;

pub use generate::generate;
pub use health::{components, health};
