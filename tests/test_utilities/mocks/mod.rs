/// Mock implementations for testing
mod mock_container_runner;
mod mock_progress_reporter;

pub use mock_container_runner::MockContainerRunner;
pub use mock_progress_reporter::MockProgressReporter;
