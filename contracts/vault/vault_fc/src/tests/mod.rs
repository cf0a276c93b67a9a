mod position_tests;

pub use fixture::*;
