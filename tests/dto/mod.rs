pub mod common_tests;
pub mod mandi_dto_tests;
