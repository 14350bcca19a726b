mod mandi;

pub use mandi::MandiService;
