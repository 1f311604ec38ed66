//! Shared test utilities for hub-db unit tests.
