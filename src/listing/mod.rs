pub mod loader;
pub mod types;

pub use loader::load_houses;
pub use types::{BuyerProfile, House, PriorityMode};
