//! The fixed schema: one `Case` object, two queries and three mutations.
//!
//! | Kind     | Field                                                | Result   |
//! |----------|------------------------------------------------------|----------|
//! | query    | `case(id: Int!)`                                     | `Case`   |
//! | query    | `allCases`                                           | `[Case!]!` |
//! | mutation | `add(name: String!, time: String!, location: String!)` | `Case!` |
//! | mutation | `update(id: Int!, name: String, time: String, location: String)` | `Case` |
//! | mutation | `delete(id: Int!)`                                   | `Case`   |
//!
//! A `null` result from `case`, `update` or `delete` means no case has that
//! id. It is not an error.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Result, Schema, SimpleObject};
use sherlock_core::{Case, CaseId, CasePatch, CaseStore, NewCase};

/// The complete GraphQL schema.
pub type CaseSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `store`.
pub fn build_schema(store: Arc<dyn CaseStore>) -> CaseSchema {
  Schema::build(QueryRoot, MutationRoot, EmptySubscription)
    .data(store)
    .finish()
}

fn store<'a>(ctx: &'a Context<'_>) -> Result<&'a Arc<dyn CaseStore>> {
  ctx.data::<Arc<dyn CaseStore>>()
}

fn list_cases(ctx: &Context<'_>) -> Result<Vec<CaseNode>> {
  let cases = store(ctx)?.list()?;
  Ok(cases.into_iter().map(CaseNode::from).collect())
}

// ─── Object ──────────────────────────────────────────────────────────────────

/// A Sherlock Holmes case.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Case")]
pub struct CaseNode {
  pub id:       CaseId,
  pub name:     String,
  pub time:     String,
  pub location: String,
}

impl From<Case> for CaseNode {
  fn from(c: Case) -> Self {
    Self {
      id:       c.id,
      name:     c.name,
      time:     c.time,
      location: c.location,
    }
  }
}

// ─── Queries ─────────────────────────────────────────────────────────────────

pub struct QueryRoot;

#[Object]
impl QueryRoot {
  /// Get case by id.
  async fn case(&self, ctx: &Context<'_>, id: CaseId) -> Result<Option<CaseNode>> {
    Ok(store(ctx)?.find_by_id(id)?.map(CaseNode::from))
  }

  /// Get all cases, in insertion order.
  async fn all_cases(&self, ctx: &Context<'_>) -> Result<Vec<CaseNode>> {
    list_cases(ctx)
  }

  /// Get all cases, in insertion order.
  #[graphql(deprecation = "use `allCases`")]
  async fn allcase(&self, ctx: &Context<'_>) -> Result<Vec<CaseNode>> {
    list_cases(ctx)
  }
}

// ─── Mutations ───────────────────────────────────────────────────────────────

pub struct MutationRoot;

#[Object]
impl MutationRoot {
  /// Add a new case. The id is assigned by the server.
  async fn add(
    &self,
    ctx: &Context<'_>,
    name: String,
    time: String,
    location: String,
  ) -> Result<CaseNode> {
    let case = store(ctx)?.append(NewCase { name, time, location })?;
    Ok(case.into())
  }

  /// Update the supplied fields of a case; omitted fields keep their value.
  async fn update(
    &self,
    ctx: &Context<'_>,
    id: CaseId,
    name: Option<String>,
    time: Option<String>,
    location: Option<String>,
  ) -> Result<Option<CaseNode>> {
    let patch = CasePatch { name, time, location };
    Ok(store(ctx)?.update_fields(id, patch)?.map(CaseNode::from))
  }

  /// Delete case by id and return it.
  async fn delete(&self, ctx: &Context<'_>, id: CaseId) -> Result<Option<CaseNode>> {
    Ok(store(ctx)?.remove(id)?.map(CaseNode::from))
  }
}
