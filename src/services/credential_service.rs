use sha2::{Digest, Sha256};

/// Verifies submitted passwords against the digest of the configured admin
/// password. The digest is computed once at startup; the password itself is
/// not kept around.
#[derive(Clone)]
pub struct CredentialService {
    digest: [u8; 32],
}

impl CredentialService {
    pub fn new(admin_password: &str) -> Self {
        Self {
            digest: Sha256::digest(admin_password.as_bytes()).into(),
        }
    }

    pub fn verify(&self, submitted: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(submitted.as_bytes()).into();

        candidate == self.digest
    }
}
