// --- File: crates/calendra_common/src/response.rs ---
//! The `{ status, data }` envelope every JSON endpoint answers with.

use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS: &str = "success";
pub const ERROR_STATUS: &str = "error";

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            data,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub status: String,
    pub error: ErrorBody,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}
