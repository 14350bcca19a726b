pub mod common;
pub mod lenient;
pub mod mandi_dto;

pub use common::*;
pub use mandi_dto::*;
