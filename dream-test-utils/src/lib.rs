//! Shared test utilities for the DREAM Tool workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables, database
//! fixtures and mock WhatsApp endpoints a test needs, and `build()` returns a
//! [`TestContext`] holding an in-memory SQLite database and the mockito server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{
            auth::{bearer_token, expired_bearer_token},
            factory,
        },
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}

/// Creates a [`TestContext`] with tables for the given entities.
///
/// With no arguments, the context has an empty database, which is useful for asserting
/// that operations fail when their tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
