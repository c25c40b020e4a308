//! Read access to the Hardhat build artifacts, keyed by logical contract
//! name. The frontend consumes these artifacts verbatim, so unknown fields
//! are preserved instead of being dropped during deserialization.

use {
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::path::{Path, PathBuf},
};

/// A compiled contract artifact as emitted by the build step. Only the
/// fields this workspace interprets are typed; everything else the compiler
/// emitted (source name, deployed bytecode, link references, ...) is carried
/// through untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: serde_json::Value,
    pub bytecode: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Registry resolving a logical contract name to its compiled artifact.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait Artifacts: Send + Sync {
    fn read(&self, name: &str) -> Result<Artifact>;
}

/// [`Artifacts`] implementation backed by a directory of `<Name>.json`
/// artifact files.
#[derive(Debug)]
pub struct Registry {
    dir: PathBuf,
}

impl Registry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for Registry {
    /// Points at the artifacts the contract build step places in this crate.
    fn default() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts"))
    }
}

impl Artifacts for Registry {
    fn read(&self, name: &str) -> Result<Artifact> {
        let path = self.dir.join(format!("{name}.json"));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read artifact {path:?}"))?;
        serde_json::from_str(&content).with_context(|| format!("malformed artifact {path:?}"))
    }
}
