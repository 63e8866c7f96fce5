use super::raw_dependency::RawDependency;

/// Mount point of the host source directory inside the container
pub const SRC_ROOT: &str = "/src";

/// Dockerfile used when the container only has to exist, not do any work
pub const PLACEHOLDER_DOCKERFILE: &str = "FROM ubuntu:14.04";

/// A container to build and run: Dockerfile body, extra `docker run` options and the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub dockerfile: String,
    pub run_options: Vec<String>,
    pub cmd: Vec<String>,
}

impl Container {
    /// `-v <host_dir>:/src`
    pub fn source_mount(host_dir: &str) -> Vec<String> {
        vec!["-v".to_string(), format!("{}:{}", host_dir, SRC_ROOT)]
    }
}

/// How the container's stdout is turned into lister output
#[derive(Debug, Clone, PartialEq)]
pub enum ListerTransform {
    /// Ignore the container output and emit these dependencies as-is
    Override(Vec<RawDependency>),
    /// Decode pydep requirements, drop the ones without a clone URL
    PydepRequirements,
}

/// A container invocation together with the transform for its output
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerCommand {
    pub container: Container,
    pub transform: ListerTransform,
}

/// Joins `rel` onto an absolute container path using POSIX rules
///
/// `.` and empty segments are dropped and `..` pops a segment, never going
/// above `/`, so the result matches the cleaned path the container sees
/// whatever the host platform is.
pub fn container_path(base: &str, rel: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(rel.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}
