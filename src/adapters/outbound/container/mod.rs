/// Container adapters for running lister containers
mod docker_runner;

pub use docker_runner::DockerContainerRunner;
