use serde::{Deserialize, Serialize};

/// Request body for both signup and signin.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful signin.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_request_requires_both_fields() {
        assert!(serde_json::from_str::<AuthRequest>(r#"{"email": "a@b.c"}"#).is_err());
        assert!(serde_json::from_str::<AuthRequest>(r#"{"password": "secret"}"#).is_err());
        let ok: AuthRequest =
            serde_json::from_str(r#"{"email": "a@b.c", "password": "secret"}"#).expect("parse");
        assert_eq!(ok.email, "a@b.c");
    }

    #[test]
    fn token_response_uses_access_token_key() {
        let json = serde_json::to_string(&TokenResponse {
            access_token: "abc".into(),
        })
        .expect("serialize");
        assert_eq!(json, r#"{"access_token":"abc"}"#);
    }
}
