use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::JwtConfig;

/// Access token lifetime: 7 days
pub const ACCESS_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;
/// Refresh token lifetime: 30 days
pub const REFRESH_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Token kind discriminator carried in the `type` claim.
///
/// A refresh token must never be accepted where an access token is
/// required, and vice versa. [`JwtAuth::verify`] deliberately does not
/// check this; the caller compares the decoded kind against what it
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn ttl_secs(&self) -> i64 {
        match self {
            TokenKind::Access => ACCESS_TOKEN_TTL_SECS,
            TokenKind::Refresh => REFRESH_TOKEN_TTL_SECS,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (vendor ID)
    pub sub: String,
    /// Token kind discriminator
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a vendor id.
    pub fn vendor_id(&self) -> Result<Uuid, uuid::Error> {
        self.sub.parse()
    }
}

/// Stateless JWT issuer/verifier.
///
/// Both token kinds are signed with the same HS256 secret; nothing is
/// persisted, so tokens remain valid until their expiry.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Issue a token of the given kind with its standard TTL.
    pub fn issue(&self, vendor_id: Uuid, kind: TokenKind) -> eyre::Result<String> {
        self.issue_with_ttl(vendor_id, kind, Duration::seconds(kind.ttl_secs()))
    }

    fn issue_with_ttl(
        &self,
        vendor_id: Uuid,
        kind: TokenKind,
        ttl: Duration,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: vendor_id.to_string(),
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify signature and expiry, and decode the claims.
    ///
    /// Fails if the signature is invalid, the token is expired, or the
    /// structure is malformed. Does NOT check the kind discriminator.
    pub fn verify(&self, token: &str) -> eyre::Result<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
