//! Session State
//!
//! Token persistence and local JWT claim decoding. The claims are a display
//! and routing hint only; the backend re-authorizes every request.

const TOKEN_KEY: &str = "lecats_token";

/// Role carried in the token claims
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Hod,
    Lecturer,
    Cr,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "HOD" => Some(Role::Hod),
            "Lecturer" => Some(Role::Lecturer),
            "CR" => Some(Role::Cr),
            _ => None,
        }
    }

    /// Route of this role's dashboard
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Hod => "/hod",
            Role::Lecturer => "/lecturer",
            Role::Cr => "/cr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Hod => "HOD",
            Role::Lecturer => "Lecturer",
            Role::Cr => "CR",
        }
    }
}

/// Claims segment of the token. The built-in admin account carries no `id`
/// or `department_id`, so both stay optional.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TokenClaims {
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub department_id: Option<u32>,
}

/// The logged-in user as the UI sees them
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub full_name: String,
    pub role: Role,
    pub id: Option<u32>,
    pub department_id: Option<u32>,
}

impl SessionUser {
    /// Decode a token into a session. Anything malformed reads as "not
    /// logged in" rather than an error.
    pub fn from_token(token: &str) -> Option<Self> {
        let claims = decode_claims(token)?;
        let role = Role::parse(&claims.role)?;
        Some(Self {
            full_name: claims.full_name,
            role,
            id: claims.id,
            department_id: claims.department_id,
        })
    }
}

/// Decode the payload segment of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64url_decode(payload)?;
    serde_json::from_slice(&bytes).ok()
}

/// Base64url decoding for the JWT payload (padding optional).
fn base64url_decode(input: &str) -> Option<Vec<u8>> {
    fn sextet(c: u8) -> Option<u32> {
        match c {
            b'A'..=b'Z' => Some((c - b'A') as u32),
            b'a'..=b'z' => Some((c - b'a' + 26) as u32),
            b'0'..=b'9' => Some((c - b'0' + 52) as u32),
            b'-' | b'+' => Some(62),
            b'_' | b'/' => Some(63),
            _ => None,
        }
    }

    let trimmed = input.trim_end_matches('=');
    let mut out = Vec::with_capacity(trimmed.len() * 3 / 4);
    let mut buf: u32 = 0;
    let mut bits = 0u32;

    for &c in trimmed.as_bytes() {
        buf = (buf << 6) | sextet(c)?;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buf >> bits) as u8);
        }
    }

    Some(out)
}

/// Read the persisted token, if any
pub fn stored_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOD_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJpZCI6NywiZnVsbF9uYW1lIjoiSmFuZSBEb2UiLCJyb2xlIjoiSE9EIiwiZGVwYXJ0bWVudF9pZCI6Mn0.sig";

    #[test]
    fn test_base64url_decode() {
        assert_eq!(base64url_decode("aGVsbG8"), Some(b"hello".to_vec()));
        assert_eq!(base64url_decode("aGVsbG8="), Some(b"hello".to_vec()));
        assert_eq!(base64url_decode("!!"), None);
    }

    #[test]
    fn test_decode_claims() {
        let claims = decode_claims(HOD_TOKEN).unwrap();
        assert_eq!(claims.full_name, "Jane Doe");
        assert_eq!(claims.role, "HOD");
        assert_eq!(claims.id, Some(7));
        assert_eq!(claims.department_id, Some(2));
    }

    #[test]
    fn test_decode_claims_without_optional_fields() {
        // Built-in admin tokens carry only name and role
        let token = "x.eyJmdWxsX25hbWUiOiJBZG1pbiBVc2VyIiwicm9sZSI6IkFkbWluIn0.y";
        let claims = decode_claims(token).unwrap();
        assert_eq!(claims.role, "Admin");
        assert_eq!(claims.id, None);
        assert_eq!(claims.department_id, None);
    }

    #[test]
    fn test_session_from_token() {
        let user = SessionUser::from_token(HOD_TOKEN).unwrap();
        assert_eq!(user.role, Role::Hod);
        assert_eq!(user.role.dashboard_path(), "/hod");
    }

    #[test]
    fn test_malformed_token_reads_as_logged_out() {
        assert!(SessionUser::from_token("not-a-token").is_none());
        assert!(SessionUser::from_token("a.b.c").is_none());
        assert!(SessionUser::from_token("").is_none());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("CR"), Some(Role::Cr));
        assert_eq!(Role::parse("Student"), None);
    }
}
