//! Deploys the Voting contract to an Ethereum compatible network and
//! publishes the deployed address plus the compiled build artifact for the
//! frontend.

pub mod arguments;
pub mod deploy;
pub mod network;
pub mod node;
pub mod publisher;

use {
    crate::{arguments::Arguments, deploy::ContractFactory, node::Node, publisher::Publisher},
    anyhow::{Context, Result},
    contracts::artifacts::Artifacts,
};

/// The logical name of the contract this tool deploys.
pub const CONTRACT_NAME: &str = "Voting";

pub async fn main(args: Arguments) -> Result<()> {
    let provider = node::provider(&args.node_url);
    let factory = deploy::Onchain {
        provider: provider.clone(),
    };
    let registry = contracts::artifacts::Registry::default();
    let publisher = Publisher::new(&args.contracts_dir);
    run(&provider, &factory, &registry, &publisher).await
}

/// The deployment workflow: a single forward pass with no retries. Every
/// fault propagates to the caller which reports it and exits non-zero.
pub async fn run(
    node: &dyn Node,
    factory: &dyn ContractFactory,
    registry: &dyn Artifacts,
    publisher: &Publisher,
) -> Result<()> {
    let chain_id = node
        .chain_id()
        .await
        .context("failed to connect to the node")?;
    if network::is_ephemeral(chain_id) {
        tracing::warn!(
            "you are deploying to an in-process dev chain which gets created and destroyed with \
             every run of the node; use a persistent local node (`anvil` or `hardhat node`) \
             instead"
        );
    }

    let deployer = node
        .signers()
        .await?
        .into_iter()
        .next()
        .context("the node does not manage any account that could sign the deployment")?;
    let balance = node.balance(deployer).await?;
    tracing::info!(
        network = network::network_name(chain_id),
        %deployer,
        %balance,
        "deploying the contracts",
    );

    let deployment = factory.deploy(CONTRACT_NAME).await?;
    tracing::info!(address = %deployment.address, "deployed {}", deployment.name);

    let artifact = registry.read(&deployment.name)?;
    publisher.publish(&deployment, &artifact).with_context(|| {
        format!(
            "{} was deployed to {} but publishing the frontend files failed; record the address \
             manually instead of deploying again",
            deployment.name, deployment.address,
        )
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            deploy::{Deployment, MockContractFactory},
            node::MockNode,
        },
        alloy::primitives::{Address, U256},
        contracts::artifacts::{Artifact, MockArtifacts},
        mockall::predicate::eq,
    };

    fn artifact() -> Artifact {
        serde_json::from_value(serde_json::json!({
            "contractName": "Voting",
            "abi": [],
            "bytecode": "0x6080",
        }))
        .unwrap()
    }

    fn node(chain_id: u64, signers: Vec<Address>) -> MockNode {
        let mut node = MockNode::new();
        node.expect_chain_id().returning(move || Ok(chain_id));
        node.expect_signers()
            .returning(move || Ok(signers.clone()));
        node.expect_balance()
            .returning(|_| Ok(U256::from(10u128.pow(18))));
        node
    }

    fn factory(address: Address) -> MockContractFactory {
        let mut factory = MockContractFactory::new();
        factory.expect_deploy().returning(move |name| {
            Ok(Deployment {
                name: name.to_string(),
                address,
            })
        });
        factory
    }

    fn registry() -> MockArtifacts {
        let mut registry = MockArtifacts::new();
        registry.expect_read().returning(|_| Ok(artifact()));
        registry
    }

    #[tokio::test]
    async fn reports_balance_of_the_first_signer() {
        let first = Address::repeat_byte(0x01);
        let second = Address::repeat_byte(0x02);

        let mut node = MockNode::new();
        node.expect_chain_id().returning(|| Ok(1));
        node.expect_signers()
            .returning(move || Ok(vec![first, second]));
        node.expect_balance()
            .with(eq(first))
            .times(1)
            .returning(|_| Ok(U256::from(1337)));

        let dir = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(dir.path());
        run(
            &node,
            &factory(Address::repeat_byte(0xab)),
            &registry(),
            &publisher,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn writes_the_deployed_address_for_the_frontend() {
        let deployed = Address::repeat_byte(0xcd);
        let dir = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(dir.path());

        run(
            &node(1, vec![Address::repeat_byte(0x01)]),
            &factory(deployed),
            &registry(),
            &publisher,
        )
        .await
        .unwrap();

        let addresses: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("contract-address.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(
            addresses,
            serde_json::json!({ "Voting": deployed.to_string() }),
        );
        assert!(dir.path().join("Voting.json").exists());
    }

    #[tokio::test]
    async fn ephemeral_chain_only_warns_and_still_deploys() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(dir.path());

        run(
            &node(network::EPHEMERAL_CHAIN_ID, vec![Address::repeat_byte(0x01)]),
            &factory(Address::repeat_byte(0xab)),
            &registry(),
            &publisher,
        )
        .await
        .unwrap();

        assert!(dir.path().join("contract-address.json").exists());
    }

    #[tokio::test]
    async fn missing_signer_aborts_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("contracts");
        let publisher = Publisher::new(&out);

        // No expectations on the factory and the registry: touching either
        // of them fails the test.
        let result = run(
            &node(1, vec![]),
            &MockContractFactory::new(),
            &MockArtifacts::new(),
            &publisher,
        )
        .await;

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn failed_publish_surfaces_after_successful_deployment() {
        let deployed = Address::repeat_byte(0xcd);
        let dir = tempfile::tempdir().unwrap();
        // A file where the output directory should be makes every write fail.
        let blocked = dir.path().join("contracts");
        std::fs::write(&blocked, b"not a directory").unwrap();
        let publisher = Publisher::new(&blocked);

        let err = run(
            &node(1, vec![Address::repeat_byte(0x01)]),
            &factory(deployed),
            &registry(),
            &publisher,
        )
        .await
        .unwrap_err();

        // The deployment itself succeeded; the error must point the operator
        // at the address that was never recorded.
        assert!(format!("{err:#}").contains(&deployed.to_string()));
        assert!(!blocked.join("contract-address.json").exists());
    }
}
