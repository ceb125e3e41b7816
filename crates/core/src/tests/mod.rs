//! Behavioral tests for the playbook core
//!
//! BDD-style tests using given-when-then naming convention.
//! Tests focus on observable behavior rather than implementation details.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod color_behaviors;
