use serenity::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigningError {
    /// The signer ran but refused the input, typically a malformed CSR.
    #[error("signer rejected the CSR: {stderr}")]
    Rejected { stderr: String },

    #[error("signer command is not configured")]
    EmptyCommand,

    #[error("failed to run signer command")]
    Io(#[from] std::io::Error),
}

/// Opaque certificate authority: raw CSR bytes in, signed certificate out.
///
/// Certificate semantics live entirely behind this seam; the pipeline only
/// moves bytes through it.
#[async_trait]
pub trait CertSigner: Send + Sync {
    async fn sign(&self, csr: &[u8]) -> Result<Vec<u8>, SigningError>;
}
