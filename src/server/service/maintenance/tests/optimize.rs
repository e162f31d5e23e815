use super::*;

/// Expect a never-maintained active system to get a pending record
#[tokio::test]
async fn schedules_record_for_due_system() -> Result<(), TestError> {
    let (test, system) = setup_with_system().await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let result = scheduler.optimize(system.id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let scheduled = result.unwrap().scheduled.expect("record scheduled");
    assert_eq!(scheduled.maintenance_status, MaintenanceStatus::Pending);

    let system = SolarSystemRepository::new(&test.db)
        .get_by_id(system.id)
        .await?
        .unwrap();
    assert_eq!(system.next_maintenance_date, Some(scheduled.maintenance_date));

    Ok(())
}

/// Expect no duplicate record when optimizing twice
#[tokio::test]
async fn does_not_duplicate_open_record() -> Result<(), TestError> {
    let (test, system) = setup_with_system().await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let first = scheduler.optimize(system.id).await.unwrap();
    let second = scheduler.optimize(system.id).await.unwrap();

    assert!(first.scheduled.is_some());
    assert!(second.scheduled.is_none());

    Ok(())
}

/// Expect inactive systems to be skipped
#[tokio::test]
async fn skips_inactive_system() -> Result<(), TestError> {
    let (mut test, _) = setup_with_system().await?;
    let system = test
        .solar_system()
        .insert_solar_system(
            1,
            SystemStatus::Inactive,
            factory::not_computed_performance_metrics(),
            Utc::now().naive_utc() - Duration::days(400),
        )
        .await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let result = scheduler.optimize(system.id).await.unwrap();

    assert!(result.scheduled.is_none());

    Ok(())
}

/// Expect a critical system to get an emergency record and enter maintenance
#[tokio::test]
async fn critical_system_gets_emergency() -> Result<(), TestError> {
    let (mut test, _) = setup_with_system().await?;
    let system = test
        .solar_system()
        .insert_solar_system(
            1,
            SystemStatus::Active,
            factory::measured_performance_metrics(0.1, 0.1),
            Utc::now().naive_utc() - Duration::days(400),
        )
        .await?;
    test.maintenance()
        .insert_record_with_downtime(
            system.id,
            MaintenanceType::Corrective,
            MaintenanceStatus::Completed,
            Utc::now().naive_utc() - Duration::days(10),
            8760.0,
        )
        .await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let result = scheduler.optimize(system.id).await.unwrap();

    let scheduled = result.scheduled.expect("record scheduled");
    assert_eq!(scheduled.maintenance_type, MaintenanceType::Emergency);

    let system = SolarSystemRepository::new(&test.db)
        .get_by_id(system.id)
        .await?
        .unwrap();
    assert_eq!(system.status, SystemStatus::Maintenance);

    Ok(())
}

/// Expect Error::NotFoundError for an unknown system
#[tokio::test]
async fn fails_for_missing_system() -> Result<(), TestError> {
    let (test, _) = setup_with_system().await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let result = scheduler.optimize(99).await;

    assert!(matches!(
        result,
        Err(Error::NotFoundError(NotFoundError::SolarSystem(99)))
    ));

    Ok(())
}

/// Expect systems before a failing system to be scheduled and later ones untouched
#[tokio::test]
async fn optimize_all_stops_at_first_failure() -> Result<(), TestError> {
    let (mut test, first) = setup_with_system().await?;
    test.solar_system()
        .insert_solar_system(
            1,
            SystemStatus::Active,
            serde_json::json!({ "state": "bogus" }),
            Utc::now().naive_utc() - Duration::days(400),
        )
        .await?;
    let third = test.solar_system().insert_mock_solar_system(1).await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let result = scheduler.optimize_all().await;

    assert!(matches!(result, Err(Error::JsonError(_))));

    let service = MaintenanceService::new(&test.db);
    assert_eq!(service.get_records(first.id).await.unwrap().len(), 1);
    assert!(service.get_records(third.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect every active system to be evaluated
#[tokio::test]
async fn optimize_all_evaluates_active_systems() -> Result<(), TestError> {
    let (mut test, _) = setup_with_system().await?;
    test.solar_system().insert_mock_solar_system(1).await?;
    test.solar_system()
        .insert_solar_system(
            1,
            SystemStatus::Decommissioned,
            factory::not_computed_performance_metrics(),
            Utc::now().naive_utc(),
        )
        .await?;

    let scheduler = MaintenanceScheduler::new(&test.db);
    let result = scheduler.optimize_all().await.unwrap();

    assert_eq!(result.evaluated, 2);
    assert!(result.results.iter().all(|r| r.scheduled.is_some()));

    Ok(())
}
