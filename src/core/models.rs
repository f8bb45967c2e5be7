use uuid::Uuid;

/// One `/wiki` invocation, carried through the logs.
#[derive(Debug, Clone)]
pub struct WikiTask {
    pub correlation_id: String,
    pub user_id: u64,
    pub user_name: String,
    pub query: Option<String>,
}

impl WikiTask {
    #[must_use]
    pub fn new(user_id: u64, user_name: impl Into<String>, query: Option<&str>) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            user_id,
            user_name: user_name.into(),
            query: query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(ToString::to_string),
        }
    }

    /// Short form of the correlation id for log lines.
    #[must_use]
    pub fn short_ref(&self) -> &str {
        self.correlation_id
            .get(..8)
            .unwrap_or(&self.correlation_id)
    }
}
