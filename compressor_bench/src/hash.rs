//!
//! The file content hash.
//!

use std::fs::File;
use std::path::Path;

use sha3::Digest;

///
/// The file content hash.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hash([u8; Self::SIZE]);

impl Hash {
    /// The hash size in bytes.
    pub const SIZE: usize = 32;

    ///
    /// Hashes the contents of the file at `path`.
    ///
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let mut file = File::open(path)
            .map_err(|error| anyhow::anyhow!("File {path:?} opening for hashing: {error}"))?;
        let mut hasher = sha3::Sha3_256::new();
        std::io::copy(&mut file, &mut hasher)
            .map_err(|error| anyhow::anyhow!("File {path:?} hashing: {error}"))?;
        Ok(Self(hasher.finalize().into()))
    }

    ///
    /// Hashes `bytes`.
    ///
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(sha3::Sha3_256::digest(bytes).into())
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Hash;

    #[test]
    fn file_matches_bytes() {
        let mut file = tempfile::NamedTempFile::new().expect("Temporary file creating failed");
        file.write_all(b"aoeu").expect("Temporary file writing failed");

        let hash = Hash::from_path(file.path()).expect("Hashing failed");
        assert_eq!(hash, Hash::from_bytes(b"aoeu"));
        assert_ne!(hash, Hash::from_bytes(b"aoeu\n"));
    }

    #[test]
    fn empty() {
        assert_eq!(
            Hash::from_bytes(b"").to_string(),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }
}
