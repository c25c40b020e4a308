/// Chain id shared by in-process dev chains (Hardhat's built-in network and
/// fresh `anvil` instances). Such a chain is created and destroyed with every
/// run of the node process, so recorded deployments never outlive it.
pub const EPHEMERAL_CHAIN_ID: u64 = 31337;

/// Maps ChainId to the network name.
pub fn network_name(chain_id: u64) -> &'static str {
    // You can find a list of available networks by network and chain id here:
    // https://chainid.network/chains.json
    match chain_id {
        1 => "Ethereum / Mainnet",
        100 => "xDAI",
        11155111 => "Ethereum / Sepolia",
        EPHEMERAL_CHAIN_ID => "Localhost",
        _ => "<unknown network>",
    }
}

/// Whether the chain only lives inside the node process it was spawned by.
pub fn is_ephemeral(chain_id: u64) -> bool {
    chain_id == EPHEMERAL_CHAIN_ID
}
