//! JSON-RPC 2.0 binding to an agent bridge process.
//!
//! The bridge hosts the agent library. `agent.create` builds an agent from
//! the signing credentials and returns the agent's method names; deploy
//! methods are then invoked as `agent.<method>` against the returned session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use vibecoding_core::deploy::{resolve_deploy_method, DeployMethod, DeployReceipt};

use super::{Agent, AgentConnector, Deployer};
use crate::config::AgentArgs;
use crate::error::Error;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Result of `agent.create`.
#[derive(Debug, Deserialize)]
struct CreatedAgent {
    #[serde(default)]
    session: Option<String>,
    #[serde(default)]
    methods: Vec<String>,
}

#[derive(Debug)]
struct RpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, Error> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        log::debug!("agent bridge call: {method}");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Agent(format!("Agent bridge unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Agent(format!(
                "Agent bridge returned HTTP {status}: {body}"
            )));
        }

        let response: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| Error::Agent(format!("Invalid agent bridge response: {e}")))?;

        if let Some(error) = response.error {
            return Err(Error::Agent(format!("{} (code {})", error.message, error.code)));
        }

        serde_json::from_value(response.result.unwrap_or(Value::Null))
            .map_err(|e| Error::Agent(format!("Unexpected {method} result: {e}")))
    }
}

/// Connects to agents hosted by the bridge at `--agent-url`.
#[derive(Debug)]
pub struct BridgeConnector {
    rpc: Arc<RpcClient>,
    private_key: Option<String>,
    rpc_url: Option<String>,
    chain_id: u64,
}

impl BridgeConnector {
    pub fn new(args: &AgentArgs) -> Self {
        Self {
            rpc: Arc::new(RpcClient {
                client: Client::new(),
                url: args.agent_url.clone(),
                next_id: AtomicU64::new(1),
            }),
            private_key: args.private_key.clone().filter(|k| !k.trim().is_empty()),
            rpc_url: args.rpc_url.clone().filter(|u| !u.trim().is_empty()),
            chain_id: args.chain_id,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.private_key.is_some() && self.rpc_url.is_some()
    }
}

#[async_trait]
impl AgentConnector for BridgeConnector {
    async fn connect(&self) -> Result<Box<dyn Agent>, Error> {
        let (Some(private_key), Some(rpc_url)) = (&self.private_key, &self.rpc_url) else {
            return Err(Error::Configuration(
                "Missing PRIVATE_KEY or RPC_URL in environment for AgentKit".to_string(),
            ));
        };

        let created: CreatedAgent = self
            .rpc
            .call(
                "agent.create",
                json!({
                    "privateKey": private_key,
                    "rpcUrl": rpc_url,
                    "chainId": self.chain_id,
                }),
            )
            .await?;

        Ok(Box::new(BridgeAgent {
            rpc: self.rpc.clone(),
            session: created.session,
            method: resolve_deploy_method(&created.methods),
            methods: created.methods,
        }))
    }
}

struct BridgeAgent {
    rpc: Arc<RpcClient>,
    session: Option<String>,
    methods: Vec<String>,
    method: Option<DeployMethod>,
}

impl Agent for BridgeAgent {
    fn methods(&self) -> &[String] {
        &self.methods
    }

    fn deployer(&self) -> Option<&dyn Deployer> {
        match self.method {
            Some(_) => Some(self),
            None => None,
        }
    }
}

#[async_trait]
impl Deployer for BridgeAgent {
    async fn deploy(&self, source: &str, args: &[Value]) -> Result<DeployReceipt, Error> {
        let Some(method) = self.method else {
            return Err(Error::CapabilityNotFound {
                methods: self.methods.clone(),
            });
        };

        let result: Value = self
            .rpc
            .call(
                &format!("agent.{}", method.method_name()),
                json!({
                    "session": self.session,
                    "code": source,
                    "constructorArgs": args,
                }),
            )
            .await?;

        Ok(DeployReceipt { method, result })
    }
}
