pub mod clock;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NutrilogConfig;
pub use error::{NutrilogError, Result};
pub use store::NutritionStore;
pub use types::*;
