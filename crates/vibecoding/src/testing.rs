//! Scripted stand-ins for the provider and the agent used by unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use vibecoding_core::deploy::{resolve_deploy_method, DeployMethod, DeployReceipt};
use vibecoding_core::CompletionRequest;

use crate::agent::{Agent, AgentConnector, Deployer};
use crate::error::Error;
use crate::provider::{CompletionError, CompletionProvider};

/// Replays queued completions; an empty queue answers with a request error.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Self::new(vec![])
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Request("connection refused".to_string())))
    }
}

/// Hands out agents exposing a fixed method list.
pub struct StubConnector {
    methods: Option<Vec<String>>,
    pub connects: AtomicUsize,
    pub deployed: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

impl StubConnector {
    pub fn with_methods(methods: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            methods: Some(methods.iter().map(|m| m.to_string()).collect()),
            connects: AtomicUsize::new(0),
            deployed: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// A connector whose credentials are missing.
    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            methods: None,
            connects: AtomicUsize::new(0),
            deployed: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentConnector for StubConnector {
    async fn connect(&self) -> Result<Box<dyn Agent>, Error> {
        self.connects.fetch_add(1, Ordering::SeqCst);

        let methods = self.methods.clone().ok_or_else(|| {
            Error::Configuration("Missing PRIVATE_KEY or RPC_URL in environment for AgentKit".to_string())
        })?;

        Ok(Box::new(StubAgent {
            method: resolve_deploy_method(&methods),
            methods,
            deployed: self.deployed.clone(),
        }))
    }
}

struct StubAgent {
    methods: Vec<String>,
    method: Option<DeployMethod>,
    deployed: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

impl Agent for StubAgent {
    fn methods(&self) -> &[String] {
        &self.methods
    }

    fn deployer(&self) -> Option<&dyn Deployer> {
        self.method.map(|_| self as &dyn Deployer)
    }
}

#[async_trait]
impl Deployer for StubAgent {
    async fn deploy(&self, source: &str, args: &[Value]) -> Result<DeployReceipt, Error> {
        let method = self
            .method
            .ok_or_else(|| Error::Agent("no deploy method".to_string()))?;
        self.deployed
            .lock()
            .unwrap()
            .push((source.to_string(), args.to_vec()));

        Ok(DeployReceipt {
            method,
            result: serde_json::json!({"contractAddress": "0x00000000000000000000000000000000000000aa"}),
        })
    }
}
