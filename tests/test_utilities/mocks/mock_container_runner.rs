use async_trait::async_trait;
use srclib_pydep::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ContainerRunner that records containers and returns canned stdout
#[derive(Clone)]
pub struct MockContainerRunner {
    output: Vec<u8>,
    should_fail: bool,
    pub runs: Arc<Mutex<Vec<Container>>>,
}

impl MockContainerRunner {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.as_bytes().to_vec(),
            should_fail: false,
            runs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }

    pub fn last_run(&self) -> Option<Container> {
        self.runs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContainerRunner for MockContainerRunner {
    async fn run(&self, container: &Container) -> Result<Vec<u8>> {
        self.runs.lock().unwrap().push(container.clone());
        if self.should_fail {
            return Err(PydepError::ContainerFailed {
                stage: "run".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "pydep-run.py: setup.py not found".to_string(),
            }
            .into());
        }
        Ok(self.output.clone())
    }
}
