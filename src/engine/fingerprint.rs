//! Content fingerprinting and the fingerprint-derived target name.

use std::path::{Path, PathBuf};

use crate::utils::config::TargetName;

/// Length of a fingerprint string: 128-bit MD5 as lowercase hex.
pub const FINGERPRINT_HEX_LEN: usize = 32;

/// MD5 of `content` as 32 lowercase hex chars. Algorithm and encoding are fixed: the target
/// naming rule depends on them, and earlier runs produced names in this form.
pub fn fingerprint(content: &[u8]) -> String {
    format!("{:x}", md5::compute(content))
}

/// `file-<fingerprint>.txt`
pub fn target_file_name(fingerprint: &str) -> String {
    format!("{}{}{}", TargetName::PREFIX, fingerprint, TargetName::EXTENSION)
}

/// Where a file with this fingerprint is moved to. Depends only on `root` and `fingerprint`,
/// so identical content always maps to the same path.
pub fn target_path(root: &Path, fingerprint: &str) -> PathBuf {
    root.join(target_file_name(fingerprint))
}

/// True if `name` already looks like `file-<32 hex>.txt`.
pub fn is_target_name(name: &str) -> bool {
    name.strip_prefix(TargetName::PREFIX)
        .and_then(|rest| rest.strip_suffix(TargetName::EXTENSION))
        .is_some_and(|hex| {
            hex.len() == FINGERPRINT_HEX_LEN
                && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_known_values() {
        assert_eq!(fingerprint(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(fingerprint(b"a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(fingerprint(b"b"), "92eb5ffee6ae2fec3ad71c777531578f");
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let data = b"the same bytes every time";
        assert_eq!(fingerprint(data), fingerprint(data));
        assert_eq!(fingerprint(data).len(), FINGERPRINT_HEX_LEN);
    }

    #[test]
    fn test_target_path_template() {
        let root = Path::new("/data/in");
        assert_eq!(
            target_path(root, "abc"),
            PathBuf::from("/data/in/file-abc.txt")
        );
    }

    #[test]
    fn test_is_target_name() {
        assert!(is_target_name(&target_file_name(&fingerprint(b"x"))));
        assert!(!is_target_name("file-abc.txt"));
        assert!(!is_target_name("notes.txt"));
        assert!(!is_target_name(
            "file-0CC175B9C0F1B6A831C399E269772661.txt"
        ));
    }
}
