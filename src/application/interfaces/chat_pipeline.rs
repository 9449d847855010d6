use async_trait::async_trait;

use crate::domain::{DomainError, InvocationBundle};

/// The composed prompt → model → parser sequence, exposed as a single
/// callable contract.
///
/// Any implementation satisfying this one operation may be substituted —
/// the remote pipeline and a test substitute are interchangeable without
/// conditional logic.
#[async_trait]
pub trait ChatPipeline: Send + Sync {
    /// Run one independent request/response turn and return the reply text.
    ///
    /// Each invocation is a fresh call with no shared state, no caching and
    /// no retries; failures propagate to the caller unmodified.
    async fn invoke(&self, bundle: &InvocationBundle) -> Result<String, DomainError>;
}
