/// Token service - issues and validates account tokens
use crate::{
    config::AuthSettings,
    error::{Result, ServerError},
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ledger_core::{Account, AccountNumber};
use serde::{Deserialize, Serialize};

/// Algorithms accepted on incoming tokens: the HMAC family only
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
    enforce_expiry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub account_number: AccountNumber,
    /// Unix seconds
    pub expires_at: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("enforce_expiry", &self.enforce_expiry)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: u64, enforce_expiry: bool) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds: i64::try_from(ttl_seconds).unwrap_or(i64::MAX),
            enforce_expiry,
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(
            &settings.jwt_secret,
            settings.token_ttl_seconds,
            settings.enforce_expiry,
        )
    }

    /// Issue an HS256 token carrying the account number
    pub fn issue_token(&self, account: &Account) -> Result<String> {
        let claims = TokenClaims {
            account_number: account.number,
            expires_at: Utc::now().timestamp().saturating_add(self.ttl_seconds),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(ServerError::from)
    }

    /// Verify a token's signature and decode its claims
    ///
    /// Tokens whose header names anything other than an HMAC algorithm are
    /// rejected before the signature is checked.
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        // `expiresAt` is not the registered `exp` claim
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)?.claims;

        if self.enforce_expiry && claims.expires_at < Utc::now().timestamp() {
            return Err(ServerError::TokenExpired {
                expires_at: claims.expires_at,
            });
        }

        Ok(claims)
    }
}
