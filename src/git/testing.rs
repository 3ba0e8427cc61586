use super::{GitError, GitQuery};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses and records every query it receives
pub struct ScriptedGit {
    responses: Mutex<VecDeque<Result<String, GitError>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedGit {
    pub fn new(responses: Vec<Result<String, GitError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitQuery for ScriptedGit {
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected git query")
    }
}
