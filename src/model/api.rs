use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing API request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
