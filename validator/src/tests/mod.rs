//! Shared test data for the validator's unit and integration tests.

pub mod fixtures;
