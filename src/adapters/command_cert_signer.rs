use std::process::Stdio;

use serenity::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::cert_signer::{CertSigner, SigningError};

/// Signs CSRs by piping them through an external command: the CSR is written
/// to the command's stdin and the signed certificate read from its stdout.
/// A non-zero exit means the CSR was rejected.
pub struct CommandCertSigner {
    command: String,
}

impl CommandCertSigner {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl CertSigner for CommandCertSigner {
    async fn sign(&self, csr: &[u8]) -> Result<Vec<u8>, SigningError> {
        let mut parts = self.command.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(SigningError::EmptyCommand);
        };

        debug!(command = %self.command, csr_bytes = csr.len(), "Invoking signer");

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(csr).await?;
            // Dropping stdin closes the pipe so the signer sees EOF.
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(SigningError::Rejected {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
