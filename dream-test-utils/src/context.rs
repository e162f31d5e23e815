//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment with an in-memory SQLite database and a mock HTTP server.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// let facility = test.facility().insert_mock_facility("Clinic").await?;
/// let system = test.solar_system().insert_mock_solar_system(facility.id).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server standing in for the WhatsApp Cloud API
    pub(crate) server: ServerGuard,
    /// Mock endpoints created by the builder, verified by `assert_mocks`
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock server, used as the WhatsApp API URL in tests.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Gives direct access to the mock server for endpoints created mid-test.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
