#[cfg(test)]
use crate::features::auth::model::AuthIdentity;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, Router};

/// Layer a router with middleware that injects a fixed identity, bypassing
/// token verification. For handler tests that assume an authenticated session.
#[cfg(test)]
#[allow(dead_code)]
pub fn with_identity(router: Router, identity: AuthIdentity) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| async move {
            request.extensions_mut().insert(identity);
            next.run(request).await
        },
    ))
}
