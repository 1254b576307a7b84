//! Integration test suite modules.

mod data_files;
mod floor_plan;
mod session;
