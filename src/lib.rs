pub mod clip;
pub mod error;
pub mod math;
pub mod query;
pub mod shape;
pub mod tessellation;

pub use error::{FlatgeomError, Result};
