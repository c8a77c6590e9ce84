//! Shared infrastructure for the simulator tests.
