use sha2::{Digest, Sha256};

pub type Checksum = [u8; 32];

/// lower case hex representation of a checksum
pub fn sha256_to_hex_string(sha: &Checksum) -> String {
    sha.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// sha256 over raw bytes, e.g. the contents of a buffer
pub fn sha256_from_bytes(bytes: &[u8]) -> Checksum {
    let mut checksum: Checksum = [0u8; 32];
    checksum.copy_from_slice(&Sha256::digest(bytes));
    checksum
}
