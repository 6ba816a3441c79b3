//! Runs the pet-store feature against an in-process fake of the API

mod support;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use petstore_bdd::common::config::{ApiConfig, RunnerConfig};
use petstore_bdd::petstore::{NameSource, Pet, PetStoreClient, PetStoreSteps};
use petstore_bdd::runner::FailureKind;
use petstore_bdd::{load_feature, parse_feature, Error, Executor, ScenarioStatus};

use support::{fake_pet_store, feature_path, Validation};

fn executor(base_url: &str) -> Executor<PetStoreSteps> {
    let steps = PetStoreSteps::new(&ApiConfig::with_base_url(base_url))
        .expect("steps")
        .with_names(NameSource::Fixed("Rex".to_string()));
    Executor::new(steps, RunnerConfig { step_timeout_secs: 10 })
}

#[tokio::test]
async fn test_feature_passes_against_documented_api() {
    let (server, pets) = fake_pet_store(Validation::Strict).await;
    let document = load_feature(&feature_path()).expect("feature");

    let summary = executor(&server.uri()).run(&document).await.expect("run");

    let names: Vec<&str> = summary.scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Add a new pet to the store",
            "Adding a new pet without name should fail",
            "Adding a new pet without photo should fail",
        ]
    );
    assert!(summary.all_passed(), "{:#?}", summary);
    assert_eq!(summary.exit_code(), 0);
    // Only the valid pet was stored
    assert_eq!(pets.ids().len(), 1);
}

#[tokio::test]
async fn test_create_then_fetch_example() {
    let (server, _pets) = fake_pet_store(Validation::Strict).await;
    let client = PetStoreClient::new(&ApiConfig::with_base_url(server.uri())).expect("client");

    let created = client
        .create_pet(&Pet::dog(1_700_000_000_000, "Rex"))
        .await
        .expect("create");
    assert_eq!(created.status, 200);
    assert_eq!(created.body["id"], json!(1_700_000_000_000_i64));
    assert_eq!(created.body["name"], json!("Rex"));

    let fetched = client.find_pet(1_700_000_000_000).await.expect("find");
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body["id"], json!(1_700_000_000_000_i64));
    assert_eq!(fetched.body["name"], json!("Rex"));
}

#[tokio::test]
async fn test_generated_ids_are_unique_across_scenarios() {
    let (server, _pets) = fake_pet_store(Validation::Lenient).await;
    let document = load_feature(&feature_path()).expect("feature");

    executor(&server.uri()).run(&document).await.expect("run");

    let requests = server.received_requests().await.expect("recording enabled");
    let mut ids: Vec<i64> = requests
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).expect("json body");
            body["id"].as_i64().expect("numeric id")
        })
        .collect();
    assert_eq!(ids.len(), 3);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_lenient_api_fails_only_negative_scenarios() {
    let (server, _pets) = fake_pet_store(Validation::Lenient).await;
    let document = load_feature(&feature_path()).expect("feature");

    let summary = executor(&server.uri()).run(&document).await.expect("run");

    let statuses: Vec<ScenarioStatus> = summary.scenarios.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            ScenarioStatus::Passed,
            ScenarioStatus::Failed,
            ScenarioStatus::Failed
        ]
    );

    let failure = summary.scenarios[1].failure.as_ref().expect("failure");
    assert_eq!(failure.kind, FailureKind::Assertion);
    assert_eq!(failure.step, "I add new pet without name");
    assert_eq!(summary.scenarios[1].steps_run, 1);
    assert_eq!(summary.exit_code(), 1);
}

#[tokio::test]
async fn test_not_found_check_gates_the_scenario() {
    // Rejects creation as documented, but every fetch succeeds
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(405)
                .set_body_json(json!({"code": 405, "type": "error", "message": "Invalid input"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Ghost"})))
        .mount(&server)
        .await;

    let document = parse_feature(
        "ghost.feature",
        "Feature: ghost\nScenario: nameless\n When I add new pet without name\n Then I can't find my new pet in the store\n",
    )
    .expect("feature");

    let summary = executor(&server.uri()).run(&document).await.expect("run");

    let report = &summary.scenarios[0];
    assert_eq!(report.status, ScenarioStatus::Failed);
    assert_eq!(report.steps_run, 2);
    let failure = report.failure.as_ref().expect("failure");
    assert_eq!(failure.step, "I can't find my new pet in the store");
    assert!(failure.diff.as_deref().expect("diff").contains("404"));
}

#[tokio::test]
async fn test_unreachable_api_is_a_transport_failure() {
    let document = load_feature(&feature_path()).expect("feature");

    let summary = executor("http://127.0.0.1:9").run(&document).await.expect("run");

    assert_eq!(summary.scenarios.len(), 3);
    for report in &summary.scenarios {
        assert_eq!(report.status, ScenarioStatus::Failed);
        assert_eq!(report.steps_run, 1);
        assert_eq!(
            report.failure.as_ref().expect("failure").kind,
            FailureKind::Transport
        );
    }
}

#[tokio::test]
async fn test_background_probe_runs_before_each_scenario() {
    let (server, _pets) = fake_pet_store(Validation::Strict).await;
    let document = parse_feature(
        "bg.feature",
        "Feature: bg\nBackground:\n Given the pet store is available\nScenario: add\n When I add a new pet\n Then I can find my new pet in the store\n",
    )
    .expect("feature");

    let summary = executor(&server.uri()).run(&document).await.expect("run");

    assert!(summary.all_passed(), "{:#?}", summary);
    assert_eq!(summary.scenarios[0].steps_total, 3);
}

#[tokio::test]
async fn test_unbound_step_makes_no_requests() {
    let (server, _pets) = fake_pet_store(Validation::Strict).await;
    let document = parse_feature(
        "typo.feature",
        "Feature: typo\nScenario: ok\n When I add a new pet\nScenario: typo\n When I add a new cat\n",
    )
    .expect("feature");

    let err = executor(&server.uri()).run(&document).await.unwrap_err();

    assert!(matches!(err, Error::UnboundStep { .. }));
    assert!(err.is_fatal_to_run());
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}
