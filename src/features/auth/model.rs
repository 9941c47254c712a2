use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity carried by a verified session token.
///
/// Kept as a discriminated enum so a handler can only obtain the kind it
/// asked for; there is no way to read an authority id out of a citizen
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthIdentity {
    Citizen(Uuid),
    Authority(Uuid),
}

impl AuthIdentity {
    pub fn kind(&self) -> TokenKind {
        match self {
            AuthIdentity::Citizen(_) => TokenKind::Citizen,
            AuthIdentity::Authority(_) => TokenKind::Authority,
        }
    }

    pub fn subject(&self) -> Uuid {
        match self {
            AuthIdentity::Citizen(id) => *id,
            AuthIdentity::Authority(id) => *id,
        }
    }
}

/// Identity-kind discriminator embedded in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Citizen,
    Authority,
}

/// JWT claims for a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> AuthIdentity {
        match self.kind {
            TokenKind::Citizen => AuthIdentity::Citizen(self.sub),
            TokenKind::Authority => AuthIdentity::Authority(self.sub),
        }
    }
}
