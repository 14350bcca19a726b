pub mod errors;
pub mod mandi;

pub use errors::DomainError;
pub use mandi::{Mandi, MandiFilter};
