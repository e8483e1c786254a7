//! Token sources.
//!
//! A [`TokenSource`] is queried once per target and yields the
//! whitespace-delimited tokens of whatever it produced. [`AmassIntel`] is the
//! production source: it shells out to `amass intel -org <name>`.

use async_trait::async_trait;
use recon_common::config::DEFAULT_AMASS_BIN;
use recon_common::error::ReconError;
use recon_common::target::Target;
use tokio::process::Command;
use tracing::{debug, trace};

#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Returns every token produced for `target`, in output order.
    async fn invoke(&self, target: &Target) -> Result<Vec<String>, ReconError>;
}

/// Runs `<program> intel -org <name>` and splits its stdout on whitespace.
#[derive(Debug, Clone)]
pub struct AmassIntel {
    program: String,
}

impl Default for AmassIntel {
    fn default() -> Self {
        Self::new(DEFAULT_AMASS_BIN)
    }
}

impl AmassIntel {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl TokenSource for AmassIntel {
    fn name(&self) -> &str {
        &self.program
    }

    async fn invoke(&self, target: &Target) -> Result<Vec<String>, ReconError> {
        let org: &str = target.query_name();
        debug!(
            "Running command to gather ASNs and their IP ranges: {} intel -org {}",
            self.program, org
        );

        let output = Command::new(&self.program)
            .args(["intel", "-org", org])
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ReconError::ToolSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ReconError::ToolFailed {
                program: self.program.clone(),
                target: org.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tokens: Vec<String> = stdout.split_whitespace().map(str::to_owned).collect();
        trace!("{} produced {} tokens for {}", self.program, tokens.len(), org);
        Ok(tokens)
    }
}

/// Queries `source` for every target in order and concatenates the tokens.
///
/// The first failure aborts the whole gather.
pub async fn gather<S>(source: &S, targets: &[Target]) -> Result<Vec<String>, ReconError>
where
    S: TokenSource + ?Sized,
{
    gather_with(source, targets, |_, _| {}).await
}

/// Same as [`gather`], calling `on_target` before each query.
pub async fn gather_with<S, F>(
    source: &S,
    targets: &[Target],
    mut on_target: F,
) -> Result<Vec<String>, ReconError>
where
    S: TokenSource + ?Sized,
    F: FnMut(usize, &Target),
{
    let mut tokens: Vec<String> = Vec::new();
    for (idx, target) in targets.iter().enumerate() {
        on_target(idx, target);
        let out = source.invoke(target).await?;
        tokens.extend(out);
    }
    Ok(tokens)
}
