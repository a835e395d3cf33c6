//! The create capability invoked between decoding and responding.
//!
//! The HTTP layer never stores or validates a student itself. It hands the
//! decoded record to whatever [`StudentCreator`] the application was built
//! with and turns the outcome into a response.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::student::StudentCreateRequest;

/// Business step run for every successfully decoded create request.
///
/// Implementations may enforce required fields, persist the record, or both.
/// Returning an error short-circuits the success acknowledgment.
#[async_trait]
pub trait StudentCreator: Send + Sync {
    async fn create(&self, student: &StudentCreateRequest) -> Result<(), CoreError>;
}

/// Accepts every decoded record without side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

#[async_trait]
impl StudentCreator for AcceptAll {
    async fn create(&self, _student: &StudentCreateRequest) -> Result<(), CoreError> {
        Ok(())
    }
}
