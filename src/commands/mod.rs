pub mod add_job;
pub mod run_build;
