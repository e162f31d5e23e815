//! Declarative test builder.
//!
//! All configuration is queued on the builder and executed in order by `build()`:
//! tables first, then database fixtures, then mock endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    facilities: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    send_message_endpoints: Vec<(String, usize)>, // (message_id, expected_requests)
    send_message_error_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            facilities: Vec::new(),
            mock_builders: Vec::new(),
            send_message_endpoints: Vec::new(),
            send_message_error_endpoints: Vec::new(),
        }
    }

    /// Create every application table, in foreign key order.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, so parents must be added
    /// before the tables referencing them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a facility with the given name during `build()`.
    ///
    /// Facilities receive IDs in the order they are added, starting at 1.
    pub fn with_mock_facility(mut self, name: impl Into<String>) -> Self {
        self.facilities.push(name.into());
        self
    }

    /// Mock a successful WhatsApp send returning `message_id`.
    pub fn with_send_message_endpoint(
        mut self,
        message_id: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.send_message_endpoints
            .push((message_id.into(), expected_requests));
        self
    }

    /// Mock a WhatsApp send failing with the given HTTP status.
    pub fn with_send_message_error_endpoint(
        mut self,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.send_message_error_endpoints
            .push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, executing all queued setup.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with tables, fixtures and mocks in place
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Facility));
            tables.push(schema.create_table_from_entity(entity::prelude::Survey));
            tables.push(schema.create_table_from_entity(entity::prelude::SurveyVersion));
            tables.push(schema.create_table_from_entity(entity::prelude::SurveyEquipment));
            tables.push(schema.create_table_from_entity(entity::prelude::TechnoEconomicAnalysis));
            tables.push(schema.create_table_from_entity(entity::prelude::SolarSystem));
            tables.push(schema.create_table_from_entity(entity::prelude::MaintenanceRecord));
            tables.push(schema.create_table_from_entity(entity::prelude::WhatsappMessage));
        }
        tables.extend(self.tables);
        test.with_tables(tables).await?;

        // 2. Insert fixtures
        for name in self.facilities {
            test.facility().insert_mock_facility(&name).await?;
        }

        // 3. Create mock endpoints, custom endpoints first so tests can stack responses
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut test.server));
        }

        for (message_id, expected) in self.send_message_endpoints {
            mocks.push(
                test.whatsapp()
                    .create_send_message_endpoint(&message_id, expected),
            );
        }

        for (status, expected) in self.send_message_error_endpoints {
            mocks.push(
                test.whatsapp()
                    .create_send_message_error_endpoint(status, expected),
            );
        }

        test.mocks = mocks;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
