pub mod calculations;
pub mod fx;
pub mod models;

pub use calculations::CalculationError;
pub use models::*;
