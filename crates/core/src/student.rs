use serde::{Deserialize, Serialize};

/// Payload accepted by `POST /api/v1/students`.
///
/// Every attribute is optional (a missing key decodes as `None`) and unknown
/// keys are ignored: this layer only checks that known fields carry the right
/// JSON types. Required-field rules belong to the configured
/// [`StudentCreator`](crate::creator::StudentCreator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCreateRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
}
