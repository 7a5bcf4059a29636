use serde::Serialize;

/// Uniform JSON envelope for every endpoint:
/// `{success, message?, count?, query?, data?, error?}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a single record
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            query: None,
            data: Some(data),
            error: None,
        }
    }

    /// Successful response with a human-readable message, e.g. after create/update
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }

    /// Failure envelope; `error` can be attached for debug detail
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            query: None,
            data: None,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Successful list response; `count` mirrors the collection length
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(data.len()),
            query: None,
            data: Some(data),
            error: None,
        }
    }
}
