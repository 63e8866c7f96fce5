use crate::dependency_listing::domain::Container;
use crate::shared::Result;
use async_trait::async_trait;

/// ContainerRunner port for building and running a container
///
/// # Async Support
/// Running a container is long and I/O bound, so the method is async.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait ContainerRunner: Send + Sync {
    /// Builds the container image, runs its command and returns what it wrote to stdout
    ///
    /// # Arguments
    /// * `container` - Dockerfile, run options and command of the lister
    ///
    /// # Cleanup
    /// Implementations release whatever they create for the run (images,
    /// containers) before returning, including on failure and timeout.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The image cannot be built
    /// - The command exits unsuccessfully
    /// - The run exceeds the runner's timeout
    async fn run(&self, container: &Container) -> Result<Vec<u8>>;
}
