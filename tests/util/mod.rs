mod test_utils;

pub use test_utils::{user, TestContextExt};
