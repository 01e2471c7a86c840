use transfer_smoke::prelude::*;

fn step(step: Step, status: u16, body: &str) -> StepReport {
    StepReport::new(
        step,
        format!("http://localhost:8080/api/v1/{}", step.path()),
        HttpRecord::new(status, body),
    )
}

#[test]
fn test_step_report_judges_success() {
    assert!(step(Step::Register, 201, "{}").success);
    assert!(step(Step::Register, 200, "{}").success);
    assert!(!step(Step::Login, 201, "{}").success);
    assert!(!step(Step::Transfers, 403, "").success);
}

#[test]
fn test_report_starts_passed() {
    let report = SmokeReport::new(Scenario::Register);
    assert!(report.passed());
    assert!(report.steps.is_empty());
    assert!(report.step(Step::Register).is_none());
}

#[test]
fn test_report_keeps_first_failure() {
    let mut report = SmokeReport::new(Scenario::RegisterLogin);
    report.push(step(Step::Register, 201, r#"{"token":"a"}"#));
    assert!(report.passed());

    report.push(step(Step::Login, 401, "nope"));
    report.push(step(Step::Transfers, 500, "later"));

    assert_eq!(
        report.outcome,
        SmokeOutcome::Failed {
            step: Step::Login,
            status: 401
        }
    );
    assert_eq!(report.steps.len(), 3);
}

#[test]
fn test_report_display_lists_steps() {
    let mut report = SmokeReport::new(Scenario::LoginTransfers);
    report.push(step(Step::Login, 200, r#"{"token":"a"}"#));
    report.push(step(Step::Transfers, 401, "unauthorized"));

    let shown = report.to_string();
    assert!(shown.starts_with("Scenario: login-transfers\n"));
    assert!(shown.contains("POST http://localhost:8080/api/v1/auth/login"));
    assert!(shown.contains("GET http://localhost:8080/api/v1/transfers"));
    assert!(shown.contains("unauthorized"));
    assert!(shown.ends_with("Result: failed at transfers (status 401)\n"));
}

#[test]
fn test_report_serializes() {
    let mut report = SmokeReport::new(Scenario::Register);
    report.push(step(Step::Register, 201, "Created"));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["scenario"], "Register");
    assert_eq!(value["outcome"], "Passed");
    assert_eq!(value["steps"][0]["record"]["status"], 201);
}
