//! Traits for abstracting the node operations the deployer performs so the
//! workflow can be tested with mocked versions of these behaviours.

use {
    alloy::{
        primitives::{Address, U256},
        providers::{Provider as _, ProviderBuilder},
    },
    anyhow::Result,
    contracts::Provider,
    url::Url,
};

/// Creates the provider talking to the node at the given URL.
pub fn provider(url: &Url) -> Provider {
    ProviderBuilder::new().connect_http(url.clone()).erased()
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Node: Send + Sync {
    /// Fetches the chain id of the connected network.
    async fn chain_id(&self) -> Result<u64>;

    /// Fetches the accounts the node manages and can sign transactions for.
    async fn signers(&self) -> Result<Vec<Address>>;

    /// Fetches the current balance of the given account in wei.
    async fn balance(&self, account: Address) -> Result<U256>;
}

#[async_trait::async_trait]
impl Node for Provider {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self.get_chain_id().await?)
    }

    async fn signers(&self) -> Result<Vec<Address>> {
        Ok(self.get_accounts().await?)
    }

    async fn balance(&self, account: Address) -> Result<U256> {
        Ok(self.get_balance(account).await?)
    }
}
