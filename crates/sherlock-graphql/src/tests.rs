//! Executor tests against a fresh seeded in-memory store.

use std::sync::Arc;

use serde_json::{Value, json};
use sherlock_core::CaseStore;
use sherlock_store_memory::MemoryStore;

use crate::{ExecutionResult, Executor, QueryRequest};

fn executor() -> (Executor, Arc<MemoryStore>) {
  let store = Arc::new(MemoryStore::seeded());
  (Executor::new(store.clone()), store)
}

async fn ok(executor: &Executor, query: &str) -> Value {
  let result = executor.execute(query).await;
  assert!(result.is_ok(), "unexpected errors: {:?}", result.errors);
  result.data
}

async fn failing(executor: &Executor, query: &str) -> ExecutionResult {
  let result = executor.execute(query).await;
  assert!(!result.is_ok(), "expected errors for {query}");
  result
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn case_by_id_returns_record() {
  let (ex, _) = executor();
  let data = ok(&ex, "{ case(id: 1) { id name time location } }").await;
  assert_eq!(
    data,
    json!({ "case": {
      "id": 1,
      "name": "A Study in Scarlet",
      "time": "March 1881",
      "location": "london"
    }})
  );
}

#[tokio::test]
async fn case_with_unknown_id_is_null_without_error() {
  let (ex, _) = executor();
  let data = ok(&ex, "{ case(id: 404) { id name } }").await;
  assert_eq!(data, json!({ "case": null }));
}

#[tokio::test]
async fn all_cases_in_insertion_order() {
  let (ex, _) = executor();
  let data = ok(&ex, "{ allCases { id } }").await;
  assert_eq!(data, json!({ "allCases": [{ "id": 1 }, { "id": 2 }] }));
}

#[tokio::test]
async fn all_cases_on_empty_store_is_empty_list() {
  let ex = Executor::new(Arc::new(MemoryStore::new()));
  let data = ok(&ex, "{ allCases { id } }").await;
  assert_eq!(data, json!({ "allCases": [] }));
}

#[tokio::test]
async fn allcase_alias_matches_all_cases() {
  let (ex, _) = executor();
  let data = ok(&ex, "{ allcase { name } allCases { name } }").await;
  assert_eq!(data["allcase"], data["allCases"]);
}

// ─── Mutations ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_assigns_fresh_id_and_is_retrievable() {
  let (ex, store) = executor();
  let data = ok(
    &ex,
    r#"mutation { add(name: "The Sign of Four", time: "1890", location: "london") { id name time location } }"#,
  )
  .await;
  let id = data["add"]["id"].as_i64().unwrap();
  assert!(id != 1 && id != 2);
  assert_eq!(store.len().unwrap(), 3);

  let fetched = ok(&ex, &format!("{{ case(id: {id}) {{ id name time location }} }}")).await;
  assert_eq!(fetched["case"], data["add"]);
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
  let (ex, _) = executor();
  let data = ok(
    &ex,
    r#"mutation { update(id: 2, location: "Bohemia") { id name time location } }"#,
  )
  .await;
  assert_eq!(
    data["update"],
    json!({
      "id": 2,
      "name": "A Scandal in Bohemia",
      "time": "20 March 1888",
      "location": "Bohemia"
    })
  );
}

#[tokio::test]
async fn update_without_fields_returns_unchanged_case() {
  let (ex, store) = executor();
  let before = store.find_by_id(1).unwrap().unwrap();
  let data = ok(&ex, "mutation { update(id: 1) { name time location } }").await;
  assert_eq!(data["update"]["name"], before.name.as_str());
  assert_eq!(data["update"]["time"], before.time.as_str());
  assert_eq!(store.find_by_id(1).unwrap(), Some(before));
}

#[tokio::test]
async fn update_unknown_id_is_null_without_error() {
  let (ex, store) = executor();
  let data = ok(&ex, r#"mutation { update(id: 9, name: "x") { id } }"#).await;
  assert_eq!(data, json!({ "update": null }));
  assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn delete_unknown_id_is_null_and_leaves_store_alone() {
  let (ex, store) = executor();
  let data = ok(&ex, "mutation { delete(id: 9) { id } }").await;
  assert_eq!(data, json!({ "delete": null }));
  assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn seeded_scenario() {
  let (ex, _) = executor();

  let data = ok(&ex, "{ case(id: 1) { name } }").await;
  assert_eq!(data["case"]["name"], "A Study in Scarlet");

  let data = ok(
    &ex,
    r#"mutation { add(name: "The Sign of Four", time: "1890", location: "london") { id } }"#,
  )
  .await;
  let new_id = data["add"]["id"].as_i64().unwrap();
  assert!(new_id > 2);

  let data = ok(&ex, "{ allCases { id } }").await;
  assert_eq!(data["allCases"].as_array().unwrap().len(), 3);

  let data = ok(&ex, "mutation { delete(id: 2) { id name } }").await;
  assert_eq!(data["delete"], json!({ "id": 2, "name": "A Scandal in Bohemia" }));

  let data = ok(&ex, "{ case(id: 2) { id } }").await;
  assert_eq!(data, json!({ "case": null }));

  let data = ok(&ex, "{ allCases { id } }").await;
  assert_eq!(data, json!({ "allCases": [{ "id": 1 }, { "id": new_id }] }));
}

// ─── Request-shape errors ────────────────────────────────────────────────────

#[tokio::test]
async fn syntax_error_is_reported() {
  let (ex, _) = executor();
  let result = failing(&ex, "{ case(id: 1) { name ").await;
  assert_eq!(result.data, Value::Null);
}

#[tokio::test]
async fn empty_document_is_reported() {
  let (ex, _) = executor();
  let result = failing(&ex, "").await;
  assert_eq!(result.data, Value::Null);
}

#[tokio::test]
async fn unknown_operation_is_reported() {
  let (ex, _) = executor();
  let result = failing(&ex, "{ solve(id: 1) { name } }").await;
  assert_eq!(result.data, Value::Null);
  assert!(result.errors[0].message.contains("solve"));
  assert!(!result.errors[0].locations.is_empty());
}

#[tokio::test]
async fn missing_required_argument_runs_no_resolver() {
  let (ex, store) = executor();
  let result =
    failing(&ex, r#"mutation { add(name: "The Sign of Four", time: "1890") { id } }"#).await;
  assert_eq!(result.data, Value::Null);
  assert!(result.errors.iter().any(|e| e.message.contains("location")));
  assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn mistyped_argument_is_rejected_not_ignored() {
  let (ex, store) = executor();
  let result = failing(&ex, r#"mutation { update(id: 1, name: 7) { name } }"#).await;
  assert_eq!(result.data, Value::Null);
  assert_eq!(
    store.find_by_id(1).unwrap().unwrap().name,
    "A Study in Scarlet"
  );

  let result = failing(&ex, r#"{ case(id: "one") { name } }"#).await;
  assert_eq!(result.data, Value::Null);
}

#[tokio::test]
async fn delete_requires_id() {
  let (ex, store) = executor();
  failing(&ex, "mutation { delete { id } }").await;
  assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn same_bad_query_fails_the_same_way() {
  let (ex, _) = executor();
  let first = failing(&ex, "{ nope }").await;
  let second = failing(&ex, "{ nope }").await;
  assert_eq!(first, second);
}

// ─── Requests with variables ─────────────────────────────────────────────────

#[tokio::test]
async fn variables_and_operation_name_are_honoured() {
  let (ex, _) = executor();
  let request = QueryRequest {
    query:          "query One($id: Int!) { case(id: $id) { name } } \
                     query All { allCases { id } }"
      .into(),
    variables:      Some(json!({ "id": 2 })),
    operation_name: Some("One".into()),
  };
  let result = ex.execute_request(request).await;
  assert!(result.is_ok(), "{:?}", result.errors);
  assert_eq!(result.data, json!({ "case": { "name": "A Scandal in Bohemia" } }));
}

// ─── Encoding ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn errors_are_omitted_from_json_when_empty() {
  let (ex, _) = executor();
  let result = ex.execute("{ case(id: 1) { id } }").await;
  let json = serde_json::to_value(&result).unwrap();
  assert_eq!(json, json!({ "data": { "case": { "id": 1 } } }));

  let result = ex.execute("{ nope }").await;
  let json = serde_json::to_value(&result).unwrap();
  assert_eq!(json["data"], Value::Null);
  assert!(json["errors"][0]["message"].is_string());
}
