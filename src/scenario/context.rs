//! State shared by all phases of one run

use serde_json::Value;

use crate::client::{ApiClient, ApiResponse, Method};
use crate::common::config::Fixtures;
use crate::common::Result;
use crate::session::{Captures, Credentials, EntityId, EntityKind, Role};

/// Counters kept across the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Requests handed to the transport
    pub sent: usize,
    /// Requests answered with a 2xx status
    pub succeeded: usize,
    /// Requests answered with any other status
    pub rejected: usize,
    /// Requests that never got an answer
    pub transport_failures: usize,
    /// Calls not made because a prerequisite was missing
    pub skipped: usize,
}

impl RunStats {
    fn record(&mut self, response: &ApiResponse) {
        self.sent += 1;
        match (response.success, response.status) {
            (true, _) => self.succeeded += 1,
            (false, Some(_)) => self.rejected += 1,
            (false, None) => self.transport_failures += 1,
        }
    }
}

/// Everything a phase reads or writes
pub struct ScenarioContext {
    pub client: ApiClient,
    pub credentials: Credentials,
    pub captures: Captures,
    pub fixtures: Fixtures,
    pub stats: RunStats,
}

impl ScenarioContext {
    pub fn new(client: ApiClient, fixtures: Fixtures) -> Self {
        Self {
            client,
            credentials: Credentials::new(),
            captures: Captures::new(),
            fixtures,
            stats: RunStats::default(),
        }
    }

    /// Issue a request, authenticated as `role` when given
    pub async fn call(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        role: Option<Role>,
    ) -> ApiResponse {
        let token = role.and_then(|role| self.credentials.get(role));
        let response = self.client.request(method, path, body, token).await;
        self.stats.record(&response);
        response
    }

    /// Issue a request with query parameters, authenticated as `role` when given
    pub async fn call_with_query(
        &mut self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        role: Option<Role>,
    ) -> ApiResponse {
        let token = role.and_then(|role| self.credentials.get(role));
        let response = self
            .client
            .request_with_query(method, path, query, None, token)
            .await;
        self.stats.record(&response);
        response
    }

    /// Whether `role` holds a token
    pub fn has_token(&self, role: Role) -> bool {
        self.credentials.get(role).is_some()
    }

    /// ID of a captured record (see [`Captures::id`])
    pub fn entity_id(&self, kind: EntityKind, key: &str) -> Result<Option<EntityId>> {
        self.captures.id(kind, key)
    }

    /// Keep a record for later phases
    pub fn capture(&mut self, kind: EntityKind, key: &str, record: Value) {
        if self.captures.insert(kind, key, record) {
            tracing::info!(kind = kind.as_str(), key, "Captured");
        }
    }

    /// Count `calls` as skipped because `reason`
    pub fn skip(&mut self, calls: usize, what: &str, reason: &str) {
        self.stats.skipped += calls;
        tracing::info!(calls, reason, "Skipping {what}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_classify_outcomes() {
        let mut stats = RunStats::default();
        stats.record(&ApiResponse::answered(201, Value::Null));
        stats.record(&ApiResponse::answered(401, Value::Null));
        stats.record(&ApiResponse::transport_failure("refused"));
        assert_eq!(
            stats,
            RunStats {
                sent: 3,
                succeeded: 1,
                rejected: 1,
                transport_failures: 1,
                skipped: 0,
            }
        );
    }

    #[test]
    fn test_skip_accumulates() {
        let client = ApiClient::new("http://localhost:8000/api").unwrap();
        let mut ctx = ScenarioContext::new(client, Fixtures::default());
        ctx.skip(2, "enrollment", "no student token");
        ctx.skip(1, "course update", "no course captured");
        assert_eq!(ctx.stats.skipped, 3);
        assert_eq!(ctx.stats.sent, 0);
    }
}
