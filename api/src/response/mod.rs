use serde::Serialize;

/// JSON envelope shared by every `/api/v1` endpoint.
///
/// ```json
/// { "success": true, "data": { "acknowledged": true, "insertedId": 3 }, "message": "Assignment created successfully" }
/// ```
///
/// Failures carry `"data": null` and a message safe to show to the client.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }

    /// A failed outcome. No payload is attached.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

/// Payload for successful responses that have nothing to return; serializes as `null`.
#[derive(Serialize, Default, Debug, Clone, Copy)]
pub struct Empty;
