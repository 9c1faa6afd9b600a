//! Response bodies shared by handlers.

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Body returned by a delete: the removed record's fields plus `"deleted": true`.
#[derive(Serialize)]
pub struct Deleted<T> {
    pub deleted: bool,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Deleted<T> {
    pub fn new(record: T) -> Self {
        Self {
            deleted: true,
            record,
        }
    }
}
