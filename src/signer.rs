use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs outbound payloads with HMAC-SHA256 under the process-wide master
/// key. The receiving payments service recomputes the digest to verify
/// integrity and authenticity.
#[derive(Clone)]
pub struct Signer {
    key: Vec<u8>,
}

impl Signer {
    pub fn new(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }

    /// Lowercase hex digest over the exact byte sequence. Deterministic:
    /// same message + same key always yields the same signature.
    pub fn sign(&self, message: &[u8]) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }
}
