//! Unit tests for the task lifecycle core.

mod generator_tests;
