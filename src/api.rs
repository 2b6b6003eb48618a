use serde::Serialize;

use crate::error::AppError;

/// `{"data": ...}` envelope shared by the resource endpoints.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Presence check for request fields.
///
/// Numbers only need to be present, so `0` is a valid value; text must also
/// be non-blank.
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub fn value<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    pub fn text(&mut self, name: &'static str, value: Option<String>) -> Option<String> {
        self.value(name, value.filter(|s| !s.trim().is_empty()))
    }

    pub fn into_error(self) -> AppError {
        AppError::MissingFields(self.missing)
    }
}
