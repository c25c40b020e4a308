use {clap::Parser, std::path::PathBuf, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Directory the deployed contract address and the build artifact get
    /// written to for the frontend to pick up.
    #[clap(long, env, default_value = "frontend/src/contracts")]
    pub contracts_dir: PathBuf,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "contracts_dir: {:?}", self.contracts_dir)?;
        Ok(())
    }
}
