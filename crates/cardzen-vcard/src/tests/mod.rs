//! End-to-end rendering tests.
