use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::TokenError;
use crate::types::QuizSession;

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_COOKIE_NAME: &str = "quiz_session";
const TOKEN_VERSION_V1: &str = "v1";
const MAX_TOKEN_LEN: usize = 512;

#[derive(Debug, Serialize, Deserialize)]
struct TokenPayload {
    #[serde(flatten)]
    session: QuizSession,
    issued_at: i64,
}

/// Signs sessions into `v1.<payload>.<signature>` cookie values and checks
/// them on the way back in.
#[derive(Clone)]
pub struct SessionCodec {
    secret: Vec<u8>,
    ttl_secs: u64,
}

impl SessionCodec {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub fn encode(&self, session: &QuizSession) -> Result<String, TokenError> {
        self.encode_at(session, Utc::now().timestamp())
    }

    pub fn encode_at(&self, session: &QuizSession, issued_at: i64) -> Result<String, TokenError> {
        let payload = TokenPayload {
            session: *session,
            issued_at,
        };
        let payload_part = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload)?);
        let sig_part = URL_SAFE_NO_PAD.encode(self.sign(&payload_part)?);
        Ok(format!("{}.{}.{}", TOKEN_VERSION_V1, payload_part, sig_part))
    }

    pub fn decode(&self, token: &str) -> Result<QuizSession, TokenError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    pub fn decode_at(&self, token: &str, now: i64) -> Result<QuizSession, TokenError> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(TokenError::Malformed("token exceeds max length".to_string()));
        }
        let mut parts = token.splitn(3, '.');
        let (Some(version), Some(payload_part), Some(sig_part)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed("expected three parts".to_string()));
        };
        if version != TOKEN_VERSION_V1 {
            return Err(TokenError::UnsupportedVersion);
        }

        let mut mac = self.mac()?;
        mac.update(payload_part.as_bytes());
        let expected = URL_SAFE_NO_PAD.decode(sig_part)?;
        mac.verify_slice(&expected)
            .map_err(|_| TokenError::BadSignature)?;

        let payload: TokenPayload = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload_part)?)?;
        let ttl = i64::try_from(self.ttl_secs).unwrap_or(i64::MAX);
        if now.saturating_sub(payload.issued_at) > ttl {
            return Err(TokenError::Expired);
        }
        Ok(payload.session)
    }

    fn sign(&self, payload_part: &str) -> Result<Vec<u8>, TokenError> {
        let mut mac = self.mac()?;
        mac.update(payload_part.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| TokenError::Malformed(e.to_string()))
    }
}

pub fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE_NAME, token, max_age_secs
    )
}

pub fn cleared_cookie() -> String {
    session_cookie("", 0)
}

/// Finds the session cookie value among all `Cookie` headers.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
