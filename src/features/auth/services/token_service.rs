use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthIdentity, Claims};

/// Service for issuing and verifying signed session tokens (HS256).
///
/// One instance signs tokens for both identity kinds; the `kind` claim keeps
/// the two spaces apart at verification time.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_expiry_secs: config.token_expiry_secs,
        }
    }

    /// Issue a session token bound to the given identity.
    pub fn issue(&self, identity: AuthIdentity) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.subject(),
            kind: identity.kind(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry_secs)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// Verify a session token, returning the identity it is bound to.
    ///
    /// Signature and expiry failures collapse into one generic 401.
    pub fn verify(&self, token: &str) -> Result<AuthIdentity> {
        let validation = Validation::default();

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::Auth("Invalid or expired token".to_string()))?;

        Ok(data.claims.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::model::TokenKind;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret-0123456789".to_string(),
            token_expiry_secs: 3600,
        }
    }

    #[test]
    fn test_citizen_token_roundtrip() {
        let service = TokenService::new(&test_config());
        let citizen_id = Uuid::new_v4();

        let token = service.issue(AuthIdentity::Citizen(citizen_id)).unwrap();
        let identity = service.verify(&token).unwrap();

        assert_eq!(identity, AuthIdentity::Citizen(citizen_id));
        assert_eq!(identity.kind(), TokenKind::Citizen);
    }

    #[test]
    fn test_authority_token_roundtrip() {
        let service = TokenService::new(&test_config());
        let authority_id = Uuid::new_v4();

        let token = service.issue(AuthIdentity::Authority(authority_id)).unwrap();
        let identity = service.verify(&token).unwrap();

        assert_eq!(identity, AuthIdentity::Authority(authority_id));
        assert_eq!(identity.subject(), authority_id);
    }

    #[test]
    fn test_token_kinds_stay_separate() {
        let service = TokenService::new(&test_config());
        let id = Uuid::new_v4();

        let token = service.issue(AuthIdentity::Citizen(id)).unwrap();
        let identity = service.verify(&token).unwrap();

        assert_ne!(identity, AuthIdentity::Authority(id));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let service = TokenService::new(&test_config());
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            token_expiry_secs: 3600,
        });

        let token = other.issue(AuthIdentity::Citizen(Uuid::new_v4())).unwrap();

        assert!(matches!(service.verify(&token), Err(AppError::Auth(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let service = TokenService::new(&config);
        let now = Utc::now();

        // Expired well past the default leeway
        let claims = Claims {
            sub: Uuid::new_v4(),
            kind: TokenKind::Citizen,
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(service.verify(&token), Err(AppError::Auth(_))));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new(&test_config());

        assert!(matches!(
            service.verify("not-a-token"),
            Err(AppError::Auth(_))
        ));
    }
}
