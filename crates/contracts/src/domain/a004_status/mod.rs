pub mod aggregate;

pub use aggregate::{Status, StatusDto};
