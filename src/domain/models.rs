use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One catalog entry. Field names double as the library file schema.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn status(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub read: usize,
    pub percent_read: f64,
}

#[derive(Serialize)]
pub struct RemoveReport {
    pub title: String,
    pub removed: usize,
}
