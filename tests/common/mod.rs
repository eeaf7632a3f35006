//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};
use gitai::ai::ApiShape;
use gitai::{AiClient, HttpSettings, ProviderDescriptor};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Build a client whose providers all point at the mock server.
pub fn mock_client(server: &MockServer) -> AiClient {
    AiClient::new(&HttpSettings::default().with_base_url(server.uri()))
}

/// Chat-completion response carrying `text` in the first choice.
pub fn chat_response(text: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }]
    })
}

/// Generate-content response carrying `text` in the first candidate part.
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// Successful response body in the shape `provider` returns.
pub fn answer_for(provider: &ProviderDescriptor, text: &str) -> Value {
    match provider.api {
        ApiShape::ChatCompletion { .. } => chat_response(text),
        ApiShape::GenerateContent => gemini_response(text),
    }
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file in the working tree without staging it.
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        self.write(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Remove a file from both the working tree and the index.
    pub fn stage_removal(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("Failed to remove file");
        let mut index = self.repo.index().expect("Failed to get index");
        index.remove_path(Path::new(name)).expect("Failed to remove path");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever is in the index. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }
}
