use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a plaintext password with argon2 and a fresh random salt. The PHC
/// output string embeds salt and parameters, so verification needs nothing
/// stored alongside it. Failures here are internal: they end up wrapped in
/// `ApiError::Internal` and logged at the response boundary.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("argon2 hashing failed: {e}"))?;
    Ok(hash.to_string())
}

/// `Ok(false)` is a wrong password; `Err` means the stored hash itself is
/// unusable (not a PHC string), which is a data problem, not a client one.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("stored password hash is not a valid PHC string: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_original_password() {
        let hash = hash_password("test12345678").expect("hash");
        assert!(verify_password("test12345678", &hash).expect("verify"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("test12345678").expect("hash");
        assert!(!verify_password("test12345679", &hash).expect("verify"));
    }

    #[test]
    fn two_hashes_of_same_password_differ() {
        // Fresh salt per hash.
        let a = hash_password("same-password").expect("hash");
        let b = hash_password("same-password").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
