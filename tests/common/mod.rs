#![allow(dead_code)]

use std::error::Error;

#[allow(unused_imports)]
pub use surveyor_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn Error>>;
