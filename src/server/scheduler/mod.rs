//! Scheduler for the periodic maintenance sweep.
//!
//! When `MAINTENANCE_SWEEP_CRON` is configured, a cron job runs
//! [`MaintenanceScheduler::optimize_all`] so that active solar systems get maintenance
//! scheduled without anyone calling the optimize endpoint.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, service::maintenance::scheduler::MaintenanceScheduler};

/// Cron job scheduler for background maintenance tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, sched })
    }

    /// Registers the maintenance sweep on `cron` and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(())` - Job registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler failure
    pub async fn start(mut self, cron: &str) -> Result<(), Error> {
        self.schedule_job(cron, "maintenance sweep", maintenance_sweep)
            .await?;

        self.sched.start().await?;

        tracing::info!("Maintenance sweep scheduled with cron expression {:?}", cron);

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of items the function reports as handled, or
    /// the error it returned.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds (e.g., "0 0 2 * * *" for daily at 02:00)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function returning the number of items handled
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::info!("{} handled {} item(s)", name, count),
                        Err(e) => tracing::error!("Error running {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

/// Runs the maintenance optimization over all active systems, returning how many
/// records were scheduled
async fn maintenance_sweep(db: DatabaseConnection) -> Result<usize, Error> {
    let result = MaintenanceScheduler::new(&db).optimize_all().await?;

    Ok(result
        .results
        .iter()
        .filter(|result| result.scheduled.is_some())
        .count())
}
