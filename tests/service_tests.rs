use urenstaat::config::Config;
use urenstaat::domain::EmployeeId;
use urenstaat::models::{NewEmployee, NewHourEntry};
use urenstaat::services::{AuthError, BootstrapOutcome, HourError, InvoiceError};
use urenstaat::state::SharedState;

async fn spawn_state() -> SharedState {
    let db_path =
        std::env::temp_dir().join(format!("urenstaat-svc-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_url = format!("sqlite:{}", db_path.display());
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    SharedState::new(config)
        .await
        .expect("Failed to create shared state")
}

async fn add_employee(state: &SharedState, name: &str, rate: f64) -> EmployeeId {
    state
        .employee_service
        .add_employee(NewEmployee {
            name: name.to_string(),
            address: None,
            hourly_rate: rate,
        })
        .await
        .expect("Failed to add employee")
        .id
}

async fn record(state: &SharedState, employee_id: EmployeeId, period: &str, hours: f64) {
    state
        .hour_service
        .record_hours(NewHourEntry {
            employee_id,
            period: period.to_string(),
            hours,
        })
        .await
        .expect("Failed to record hours");
}

#[tokio::test]
async fn test_invoice_totals_hours_times_rate() {
    let state = spawn_state().await;
    let jan = add_employee(&state, "Jan", 20.0).await;
    let piet = add_employee(&state, "Piet", 35.0).await;

    record(&state, jan, "2024-01", 10.0).await;
    record(&state, jan, "2024-01", 5.0).await;
    record(&state, jan, "2024-02", 8.0).await;
    record(&state, piet, "2024-01", 3.0).await;

    let invoice = state
        .invoice_service
        .compute_invoice(jan, "2024-01")
        .await
        .unwrap();

    assert_eq!(invoice.employee.name, "Jan");
    assert_eq!(invoice.entry_count(), 2);
    assert!((invoice.total_hours - 15.0).abs() < f64::EPSILON);
    assert!((invoice.amount - 300.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_invoice_for_empty_period_is_zero() {
    let state = spawn_state().await;
    let jan = add_employee(&state, "Jan", 20.0).await;

    let invoice = state
        .invoice_service
        .compute_invoice(jan, "2030-12")
        .await
        .unwrap();

    assert!(invoice.entries.is_empty());
    assert!(invoice.total_hours.abs() < f64::EPSILON);
    assert!(invoice.amount.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_invoice_for_unrecordable_period_is_zero() {
    let state = spawn_state().await;
    let jan = add_employee(&state, "Jan", 20.0).await;
    record(&state, jan, "2024-01", 8.0).await;

    for period in ["x".repeat(65), "   ".to_string(), "2024\n01".to_string()] {
        let invoice = state
            .invoice_service
            .compute_invoice(jan, &period)
            .await
            .unwrap();

        assert!(invoice.entries.is_empty(), "{period:?}");
        assert!(invoice.total_hours.abs() < f64::EPSILON);
        assert!(invoice.amount.abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn test_invoice_for_unknown_employee() {
    let state = spawn_state().await;

    let result = state
        .invoice_service
        .compute_invoice(EmployeeId::new(99), "2024-01")
        .await;

    assert!(matches!(result, Err(InvoiceError::EmployeeNotFound(id)) if id == EmployeeId::new(99)));
}

#[tokio::test]
async fn test_hours_need_an_existing_employee() {
    let state = spawn_state().await;

    let result = state
        .hour_service
        .record_hours(NewHourEntry {
            employee_id: EmployeeId::new(5),
            period: "2024-01".to_string(),
            hours: 8.0,
        })
        .await;

    assert!(matches!(result, Err(HourError::EmployeeNotFound(_))));
    assert_eq!(state.store.count_hour_entries().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_hours_are_not_stored() {
    let state = spawn_state().await;
    let jan = add_employee(&state, "Jan", 20.0).await;

    for (period, hours) in [("2024-01", -1.0), ("   ", 8.0), ("2024-01", f64::NAN)] {
        let result = state
            .hour_service
            .record_hours(NewHourEntry {
                employee_id: jan,
                period: period.to_string(),
                hours,
            })
            .await;
        assert!(matches!(result, Err(HourError::Validation(_))), "{period} {hours}");
    }

    assert_eq!(state.store.count_hour_entries().await.unwrap(), 0);
}

#[tokio::test]
async fn test_periods_are_distinct_and_sorted() {
    let state = spawn_state().await;
    let jan = add_employee(&state, "Jan", 20.0).await;
    let piet = add_employee(&state, "Piet", 25.0).await;

    record(&state, jan, "2024-02", 1.0).await;
    record(&state, piet, "2024-01", 1.0).await;
    record(&state, jan, "2024-01", 1.0).await;
    record(&state, jan, " 2024-10 ", 1.0).await;

    let periods = state.hour_service.list_periods().await.unwrap();
    assert_eq!(periods, vec!["2024-01", "2024-02", "2024-10"]);
}

#[tokio::test]
async fn test_periods_sort_as_strings() {
    let state = spawn_state().await;
    let jan = add_employee(&state, "Jan", 20.0).await;

    record(&state, jan, "2024-2", 1.0).await;
    record(&state, jan, "2024-10", 1.0).await;
    record(&state, jan, "2024-2", 2.0).await;

    let periods = state.hour_service.list_periods().await.unwrap();
    assert_eq!(periods, vec!["2024-10", "2024-2"]);
}

#[tokio::test]
async fn test_employees_listed_in_creation_order() {
    let state = spawn_state().await;
    add_employee(&state, "Zoë", 20.0).await;
    add_employee(&state, "Anna", 22.5).await;

    let employees = state.employee_service.list_employees().await.unwrap();
    let names: Vec<_> = employees.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["Zoë", "Anna"]);
    assert_eq!(employees[0].id, EmployeeId::new(1));
}

#[tokio::test]
async fn test_bootstrap_admin_runs_once() {
    let state = spawn_state().await;

    let first = state
        .auth_service
        .bootstrap_admin("admin", None)
        .await
        .unwrap();
    let generated = match first {
        BootstrapOutcome::Created {
            generated_password: Some(password),
            ..
        } => password,
        other => panic!("unexpected outcome: {other:?}"),
    };
    let hash = state.store.get_user_password_hash("admin").await.unwrap();

    let second = state
        .auth_service
        .bootstrap_admin("admin", Some("something-else"))
        .await
        .unwrap();
    assert_eq!(
        second,
        BootstrapOutcome::AlreadyExists {
            username: "admin".to_string()
        }
    );
    assert_eq!(
        state.store.get_user_password_hash("admin").await.unwrap(),
        hash
    );

    assert_eq!(
        state.auth_service.login("admin", &generated).await.unwrap(),
        "admin"
    );
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let state = spawn_state().await;
    state
        .auth_service
        .bootstrap_admin("admin", Some("geheim-wachtwoord"))
        .await
        .unwrap();

    assert!(matches!(
        state.auth_service.login("admin", "fout").await,
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        state.auth_service.login("onbekend", "geheim-wachtwoord").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_set_password_replaces_hash() {
    let state = spawn_state().await;
    state
        .auth_service
        .bootstrap_admin("admin", Some("eerste-wachtwoord"))
        .await
        .unwrap();

    state
        .auth_service
        .set_password("admin", "tweede-wachtwoord")
        .await
        .unwrap();

    assert!(state.auth_service.login("admin", "eerste-wachtwoord").await.is_err());
    assert!(state.auth_service.login("admin", "tweede-wachtwoord").await.is_ok());

    assert!(matches!(
        state.auth_service.set_password("niemand", "tweede-wachtwoord").await,
        Err(AuthError::UserNotFound(_))
    ));
}
