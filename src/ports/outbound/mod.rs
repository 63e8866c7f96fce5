/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (container runtime, file system, console).
pub mod container_runner;
pub mod input_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use container_runner::ContainerRunner;
pub use input_reader::{ListerOutputReader, RawDependencyReader};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
