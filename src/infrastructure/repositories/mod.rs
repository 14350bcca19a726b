mod mandi;
mod traits;

pub use mandi::{InMemoryMandiRepository, MandiRecord};
pub use traits::MandiRepository;
