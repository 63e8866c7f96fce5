use crate::dependency_listing::domain::Container;
use crate::ports::outbound::ContainerRunner;
use crate::shared::error::PydepError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;
use uuid::Uuid;

/// Upper bound for each cleanup command
const CLEANUP_TIMEOUT: Duration = Duration::from_secs(30);

/// DockerContainerRunner adapter for running lister containers with the Docker CLI
///
/// Each run writes the Dockerfile into a throwaway build context, builds an
/// image under a unique tag and runs the command with `--rm`. The container
/// is named after the tag. Build and run together are bounded by the
/// configured timeout.
///
/// Whatever the outcome, the image is removed afterwards. On timeout the
/// container is force-removed first, since dropping the `docker` client
/// does not stop it.
pub struct DockerContainerRunner {
    docker_binary: String,
    timeout: Duration,
}

impl DockerContainerRunner {
    pub fn new(docker_binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            docker_binary: docker_binary.into(),
            timeout,
        }
    }

    async fn build_and_run(&self, container: &Container, tag: &str) -> Result<Vec<u8>> {
        let context = tempfile::TempDir::new().context("Failed to create Docker build context")?;
        std::fs::write(context.path().join("Dockerfile"), &container.dockerfile)
            .context("Failed to write Dockerfile")?;

        let build = Command::new(&self.docker_binary)
            .args(["build", "-q", "-t", tag])
            .arg(context.path())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to start {}", self.docker_binary))?;
        check_status("build", &build)?;

        let run = Command::new(&self.docker_binary)
            .args(["run", "--rm", "--name", tag])
            .args(&container.run_options)
            .arg(tag)
            .args(&container.cmd)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to start {}", self.docker_binary))?;
        check_status("run", &run)?;

        Ok(run.stdout)
    }

    /// Runs a cleanup command, ignoring its outcome
    ///
    /// The object may already be gone, e.g. a failed build leaves no image.
    async fn cleanup(&self, args: &[&str]) {
        let command = Command::new(&self.docker_binary)
            .args(args)
            .kill_on_drop(true)
            .output();
        let _ = tokio::time::timeout(CLEANUP_TIMEOUT, command).await;
    }
}

#[async_trait]
impl ContainerRunner for DockerContainerRunner {
    async fn run(&self, container: &Container) -> Result<Vec<u8>> {
        let tag = format!("srclib-pydep-{}", Uuid::new_v4().simple());

        let result =
            match tokio::time::timeout(self.timeout, self.build_and_run(container, &tag)).await {
                Ok(result) => result,
                Err(_) => {
                    self.cleanup(&["rm", "-f", tag.as_str()]).await;
                    Err(PydepError::ContainerTimeout {
                        timeout: self.timeout,
                    }
                    .into())
                }
            };

        self.cleanup(&["rmi", "-f", tag.as_str()]).await;
        result
    }
}

fn check_status(stage: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(PydepError::ContainerFailed {
        stage: stage.to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Container {
        Container {
            dockerfile: "FROM ubuntu:14.04".to_string(),
            run_options: Container::source_mount("/w"),
            cmd: vec!["pydep-run.py".to_string(), "dep".to_string(), "/src".to_string()],
        }
    }

    #[tokio::test]
    async fn test_missing_binary_fails_to_start() {
        let runner = DockerContainerRunner::new(
            "srclib-pydep-no-such-docker-binary",
            Duration::from_secs(5),
        );

        let err = runner.run(&container()).await.unwrap_err();

        assert!(err.to_string().contains("Failed to start"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_build_reports_stage() {
        let runner = DockerContainerRunner::new("false", Duration::from_secs(5));

        let err = runner.run(&container()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PydepError>(),
            Some(PydepError::ContainerFailed { stage, .. }) if stage == "build"
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_returns_stdout() {
        // `echo` stands in for docker: every invocation succeeds and the run
        // invocation prints its own arguments.
        let runner = DockerContainerRunner::new("echo", Duration::from_secs(5));

        let stdout = runner.run(&container()).await.unwrap();
        let stdout = String::from_utf8(stdout).unwrap();

        assert!(stdout.starts_with("run --rm --name srclib-pydep-"));
        assert!(stdout.contains(" -v /w:/src srclib-pydep-"));
        assert!(stdout.trim_end().ends_with("pydep-run.py dep /src"));
    }

    /// Writes a shell script standing in for docker that logs each invocation
    /// to `docker.log` and runs `run_body` for `docker run`.
    #[cfg(unix)]
    fn fake_docker(dir: &std::path::Path, run_body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("docker");
        let log = dir.join("docker.log");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\nif [ \"$1\" = run ]; then {}; fi\n",
                log.display(),
                run_body
            ),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    fn logged_calls(dir: &std::path::Path) -> Vec<String> {
        std::fs::read_to_string(dir.join("docker.log"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[cfg(unix)]
    fn built_tag(calls: &[String]) -> String {
        calls[0]
            .strip_prefix("build -q -t ")
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap()
            .to_string()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_image_removed_after_successful_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let docker = fake_docker(dir.path(), "echo '[]'");
        let runner = DockerContainerRunner::new(docker, Duration::from_secs(5));

        let stdout = runner.run(&container()).await.unwrap();

        assert_eq!(stdout, b"[]\n");
        let calls = logged_calls(dir.path());
        let tag = built_tag(&calls);
        assert_eq!(calls.len(), 3);
        assert!(calls[1].starts_with(&format!("run --rm --name {} ", tag)));
        assert_eq!(calls[2], format!("rmi -f {}", tag));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_image_removed_after_failed_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let docker = fake_docker(dir.path(), "exit 1");
        let runner = DockerContainerRunner::new(docker, Duration::from_secs(5));

        let err = runner.run(&container()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PydepError>(),
            Some(PydepError::ContainerFailed { stage, .. }) if stage == "run"
        ));
        let calls = logged_calls(dir.path());
        let tag = built_tag(&calls);
        assert_eq!(calls.last().unwrap(), &format!("rmi -f {}", tag));
        assert!(!calls.iter().any(|call| call.starts_with("rm ")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_removes_container_then_image() {
        let dir = tempfile::TempDir::new().unwrap();
        let docker = fake_docker(dir.path(), "sleep 5");
        let runner = DockerContainerRunner::new(docker, Duration::from_millis(500));

        let err = runner.run(&container()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PydepError>(),
            Some(PydepError::ContainerTimeout { .. })
        ));
        assert!(err.to_string().contains("timed out after 500ms"));
        let calls = logged_calls(dir.path());
        let tag = built_tag(&calls);
        assert_eq!(
            &calls[calls.len() - 2..],
            &[format!("rm -f {}", tag), format!("rmi -f {}", tag)]
        );
    }
}
