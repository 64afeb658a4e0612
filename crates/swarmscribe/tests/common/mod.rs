use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use swarmscribe_config::Settings;
use swarmscribe_docker::{CommandExecutor, CommandLine, DockerError, Result};
use tempfile::TempDir;

pub const SERVICE_LS: &str = "docker service ls --format '{{.Name}} {{.Mode}}'";
pub const NETWORK_LS: &str = "docker network ls --format '{{.ID}} {{.Name}}'";

pub fn inspect_command(service: &str) -> String {
    format!("docker service inspect {}", service)
}

/// Answers docker commands from a table and records every call
#[derive(Default)]
pub struct ScriptedExecutor {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn ok(mut self, command: impl Into<String>, stdout: &str) -> Self {
        self.responses.insert(command.into(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command: impl Into<String>, stderr: &str) -> Self {
        self.responses.insert(command.into(), Err(stderr.to_string()));
        self
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedExecutor {
    async fn run(&self, command: &CommandLine) -> Result<String> {
        let key = command.to_string();
        self.calls.lock().unwrap().push(key.clone());
        match self.responses.get(&key) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => Err(DockerError::CommandFailed {
                command: key,
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            }),
            None => panic!("unexpected command: {key}"),
        }
    }
}

/// Output directory for one test
pub struct TestOutput {
    pub root: TempDir,
}

impl TestOutput {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            sudo: false,
            output_dir: self.root.path().join("docker_compose"),
            ..Default::default()
        }
    }

    pub fn file(&self, stack: &str) -> PathBuf {
        self.settings().output_path(stack)
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// Inspect payload for a replicated service
pub fn replicated_inspect(image: &str, replicas: u64, extra_task: &str, endpoint: &str) -> String {
    format!(
        r#"[{{"ID":"svc{replicas}","Spec":{{
            "TaskTemplate":{{"ContainerSpec":{{"Image":"{image}"}}{extra_task}}},
            "Mode":{{"Replicated":{{"Replicas":{replicas}}}}},
            "UpdateConfig":{{"Parallelism":1,"FailureAction":"pause","Monitor":5000000000,"MaxFailureRatio":0,"Order":"stop-first"}},
            "RollbackConfig":{{"Parallelism":1,"FailureAction":"pause","Monitor":5000000000,"MaxFailureRatio":0,"Order":"stop-first"}}
            {endpoint}
        }}}}]"#
    )
}

/// Inspect payload for a global service with one mount
pub fn global_inspect(image: &str, source: &str, target: &str) -> String {
    format!(
        r#"[{{"Spec":{{
            "TaskTemplate":{{"ContainerSpec":{{"Image":"{image}","Mounts":[{{"Type":"bind","Source":"{source}","Target":"{target}"}}]}}}},
            "Mode":{{"Global":{{}}}},
            "UpdateConfig":{{"Parallelism":1,"FailureAction":"pause","Order":"stop-first"}},
            "RollbackConfig":{{"Parallelism":1,"FailureAction":"pause","Order":"stop-first"}}
        }}}}]"#
    )
}
