use std::sync::Mutex;

use modwarden::adapters::{CertSigner, SigningError};
use serenity::async_trait;

/// Signer that returns its input reversed, so tests can verify the CSR
/// bytes actually flowed through the signing seam. Can be switched to
/// reject everything.
pub struct MockCertSigner {
    reject: bool,
    pub signed: Mutex<Vec<Vec<u8>>>,
}

impl MockCertSigner {
    pub fn new() -> Self {
        Self {
            reject: false,
            signed: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            signed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CertSigner for MockCertSigner {
    async fn sign(&self, csr: &[u8]) -> Result<Vec<u8>, SigningError> {
        if self.reject {
            return Err(SigningError::Rejected {
                stderr: "malformed CSR".to_string(),
            });
        }
        self.signed.lock().unwrap().push(csr.to_vec());
        Ok(csr.iter().rev().copied().collect())
    }
}
