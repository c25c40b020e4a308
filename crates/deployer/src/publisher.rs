//! Persists deployment results in the directory the frontend loads its
//! contract data from.

use {
    crate::deploy::Deployment,
    anyhow::{Context, Result},
    contracts::artifacts::Artifact,
    std::{io::Write, path::PathBuf},
};

/// Writes the address record and the compiled build artifact of a deployment
/// into the frontend's contracts directory.
pub struct Publisher {
    dir: PathBuf,
}

impl Publisher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Publishes the deployed address and the full build artifact, replacing
    /// the files of any earlier deployment. Creates the output directory if
    /// it does not exist yet.
    ///
    /// The two writes are sequential; a failure of the second one does not
    /// roll back the first.
    pub fn publish(&self, deployment: &Deployment, artifact: &Artifact) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {:?}", self.dir))?;

        let mut addresses = serde_json::Map::new();
        addresses.insert(
            deployment.name.clone(),
            serde_json::Value::String(deployment.address.to_string()),
        );
        self.write_json("contract-address.json", &addresses)?;
        self.write_json(&format!("{}.json", deployment.name), artifact)?;
        Ok(())
    }

    /// Writes the pretty printed JSON to a temporary file and atomically
    /// moves it into place so the frontend can never observe a partially
    /// written file.
    fn write_json(&self, file_name: &str, content: &impl serde::Serialize) -> Result<()> {
        let path = self.dir.join(file_name);
        let json = serde_json::to_string_pretty(content)?;
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("failed to create temporary file in {:?}", self.dir))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("failed to write {path:?}"))?;
        file.persist(&path)
            .with_context(|| format!("failed to move {path:?} into place"))?;
        Ok(())
    }
}
