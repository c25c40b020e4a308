use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    contracts::Provider,
};

/// The result of a successful contract deployment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deployment {
    /// Logical name of the deployed contract, e.g. "Voting".
    pub name: String,
    /// The address the contract ended up at on chain.
    pub address: Address,
}

/// Abstracts deploying a contract by its logical name so the workflow can be
/// tested without a running node.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractFactory: Send + Sync {
    /// Deploys the named contract with no constructor arguments and only
    /// returns once the deployment transaction was mined. A single attempt
    /// is authoritative; nothing gets retried.
    async fn deploy(&self, name: &str) -> Result<Deployment>;
}

/// [`ContractFactory`] deploying the contracts this workspace has bindings
/// for through the connected node. The node signs the deployment transaction
/// with its default account.
pub struct Onchain {
    pub provider: Provider,
}

#[async_trait::async_trait]
impl ContractFactory for Onchain {
    async fn deploy(&self, name: &str) -> Result<Deployment> {
        let address = match name {
            "Voting" => {
                let instance = contracts::Voting::deploy(self.provider.clone())
                    .await
                    .context("failed to deploy the Voting contract")?;
                *instance.address()
            }
            _ => anyhow::bail!("no bindings for contract {name}"),
        };
        Ok(Deployment {
            name: name.to_string(),
            address,
        })
    }
}
