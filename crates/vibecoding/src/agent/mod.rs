//! Deployment through an external blockchain agent.
//!
//! The agent is opaque: all we rely on is that it can list its methods and,
//! possibly, deploy a contract. Deployment is a one-shot call with no retry.

use async_trait::async_trait;
use serde_json::Value;
use vibecoding_core::deploy::{DeployReceipt, DeployRequest};

use crate::error::Error;

pub mod bridge;

pub use bridge::BridgeConnector;

/// Something that can deploy contract source code.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, source: &str, args: &[Value]) -> Result<DeployReceipt, Error>;
}

/// A constructed agent.
pub trait Agent: Send + Sync {
    /// Method names the agent exposes, for diagnostics.
    fn methods(&self) -> &[String];

    /// The deploy capability, when the agent has one.
    fn deployer(&self) -> Option<&dyn Deployer>;
}

/// Builds agents on demand.
#[async_trait]
pub trait AgentConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn Agent>, Error>;
}

/// Construct an agent and deploy the request through it.
pub async fn deploy(
    connector: &dyn AgentConnector,
    request: &DeployRequest,
) -> Result<DeployReceipt, Error> {
    let agent = connector.connect().await?;

    let Some(deployer) = agent.deployer() else {
        return Err(Error::CapabilityNotFound {
            methods: agent.methods().to_vec(),
        });
    };

    deployer
        .deploy(&request.code, &request.constructor_args)
        .await
}
