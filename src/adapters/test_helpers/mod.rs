//! Test helpers for mocking dependencies in tests
//!
//! This module provides mock implementations of the core ports:
//! - `MockEnvironment`: In-memory filesystem and process description
//! - `MockParser`: Scripted structured parser
//! - `MockUserInteraction`: Output capture
//!
//! These mocks are designed to be simple and focused on testing,
//! avoiding unnecessary complexity while providing essential functionality.

mod mock_environment;
mod mock_parser;
mod mock_user_interaction;

pub use mock_environment::MockEnvironment;
pub use mock_parser::{MockParser, ParseCall};
pub use mock_user_interaction::MockUserInteraction;
