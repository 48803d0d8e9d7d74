use sha2::{Digest, Sha256};

/// Computes the SHA-256 fingerprint of `text`, lowercase hex encoded.
///
/// Deterministic over any input, including the empty string and non-ASCII
/// text. Used to detect duplication or tampering of prompt text, not for
/// secrecy.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let actual = fingerprint("Hello");
        let expected = fingerprint("Hello");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_fingerprint_known_digests() {
        let actual = fingerprint("Hello1");
        let expected = "948edbe7ede5aa7423476ae29dcd7d61e7711a071aea0d83698377effa896525";
        assert_eq!(actual, expected);

        let actual = fingerprint("Hello2");
        let expected = "be98c2510e417405647facb89399582fc499c3de4452b3014857f92e6baad9a9";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_fingerprint_empty_string() {
        let actual = fingerprint("");
        let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_fingerprint_non_ascii() {
        let actual = fingerprint("héllo wörld 🌍");
        let expected = fingerprint("héllo wörld 🌍");
        assert_eq!(actual, expected);
        assert_eq!(actual.len(), 64);
    }

    #[test]
    fn test_fingerprint_differs_for_different_inputs() {
        let actual = fingerprint("Hello1");
        let expected = fingerprint("Hello2");
        assert_ne!(actual, expected);
    }
}
