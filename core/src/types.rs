//! Domain DTOs for the student directory.
//!
//! # Design
//! `RawUser` mirrors the public demo API's user schema (only the fields the
//! directory reads; serde ignores the rest). `Student` is the display record
//! produced by [`crate::transform`]. The mock-server crate defines its own
//! copy of the raw schema; integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// Company block nested in a raw user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub name: String,
}

/// A user record as returned by the external API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// A display-ready student record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub course: String,
    pub year: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Result of one students fetch. There is no partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(Vec<Student>),
    Failure(String),
}

impl<E: std::fmt::Display> From<Result<Vec<Student>, E>> for FetchOutcome {
    fn from(result: Result<Vec<Student>, E>) -> Self {
        match result {
            Ok(students) => FetchOutcome::Success(students),
            Err(err) => FetchOutcome::Failure(err.to_string()),
        }
    }
}
