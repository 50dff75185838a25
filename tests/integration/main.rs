//! Integration test modules.

mod tracker_test;
