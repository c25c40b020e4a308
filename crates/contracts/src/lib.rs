//! Typed bindings for the contracts this workspace deploys, generated from
//! the Hardhat build artifacts checked in under `artifacts/`.

pub mod artifacts;

pub use alloy::providers::DynProvider as Provider;

#[macro_export]
macro_rules! bindings {
    ($contract:ident) => {
        paste::paste! {
            // Generate the main bindings in a private module. That allows
            // us to re-export all items in our own module while also adding
            // some items ourselves.
            #[allow(non_snake_case)]
            mod [<$contract Private>] {
                alloy::sol!(
                    #[allow(missing_docs)]
                    #[sol(rpc)]
                    $contract,
                    concat!("./artifacts/", stringify!($contract), ".json"),
                );
            }

            #[allow(non_snake_case)]
            pub mod $contract {
                pub use super::[<$contract Private>]::*;

                pub type Instance = $contract::[<$contract Instance>]<$crate::Provider>;

                /// Deploys the contract with no constructor arguments and
                /// waits until the deployment transaction was mined.
                pub async fn deploy(provider: $crate::Provider) -> ::alloy::contract::Result<Instance> {
                    $contract::deploy(provider).await
                }
            }
        }
    };
}

bindings!(Voting);
