//! One-time admin codes for bootstrapping the first administrator.
//!
//! When the server starts without any admin user, a code is generated and written to the
//! log. Registering with that code within 60 seconds grants the new account admin rights.
//! Codes live only in memory and are invalidated after one successful use or on expiry.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::{sync::RwLock, time::Instant};

/// Time-to-live for admin codes in seconds.
const ADMIN_CODE_TTL_SECONDS: u64 = 60;

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(ADMIN_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// A code taken out of the service by a matching [`AdminCodeService::claim`].
pub struct AdminCodeClaim {
    code: AdminCode,
}

/// Holds at most one active admin code.
///
/// Cloning shares the underlying slot, so the copy in `AppState` and the one used at
/// startup refer to the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - 32 alphanumeric characters, valid for 60 seconds
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(AdminCode::new(code.clone()));
        code
    }

    /// Takes the stored code out of its slot if `input` matches.
    ///
    /// While claimed the code cannot be used by anyone else. Pass the claim to
    /// [`release`](Self::release) if the registration it was meant for fails. An expired
    /// code is cleared and never matches. A wrong input leaves a valid code in place.
    ///
    /// # Returns
    /// - `Some(AdminCodeClaim)` - Code matched and is now held by the caller
    /// - `None` - Code missing, expired or different
    pub async fn claim(&self, input: &str) -> Option<AdminCodeClaim> {
        let mut code = self.code.write().await;

        let stored = code.as_ref()?;

        if stored.is_expired() {
            *code = None;
            return None;
        }

        if stored.code == input {
            return code.take().map(|code| AdminCodeClaim { code });
        }

        None
    }

    /// Puts a claimed code back with its original expiry.
    ///
    /// Nothing is restored if the code has expired meanwhile or a newer code was
    /// generated.
    pub async fn release(&self, claim: AdminCodeClaim) {
        let mut code = self.code.write().await;

        if code.is_none() && !claim.code.is_expired() {
            *code = Some(claim.code);
        }
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    /// True if a non-expired code is stored; clears an expired one.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests generating a new admin code.
    ///
    /// Expected: 32 alphanumeric characters stored as a valid code
    #[tokio::test]
    async fn generates_alphanumeric_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests that a matching code is accepted exactly once.
    ///
    /// Expected: first validation succeeds, second fails
    #[tokio::test]
    async fn code_is_single_use() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.claim(&code).await.is_some());
        assert!(service.claim(&code).await.is_none());
        assert!(!service.has_valid_code().await);
    }

    /// Tests that a wrong code keeps the stored one.
    ///
    /// Expected: validation fails, real code still usable
    #[tokio::test]
    async fn wrong_code_keeps_stored_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.claim("wrong_code").await.is_none());
        assert!(service.claim(&code).await.is_some());
    }

    /// Tests validation without a generated code.
    ///
    /// Expected: validation fails
    #[tokio::test]
    async fn rejects_when_no_code() {
        let service = AdminCodeService::new();
        assert!(service.claim("any_code").await.is_none());
    }

    /// Tests that regenerating replaces the previous code.
    ///
    /// Expected: old code rejected, new code accepted
    #[tokio::test]
    async fn regenerate_replaces_code() {
        let service = AdminCodeService::new();
        let old = service.generate().await;
        let new = service.generate().await;

        assert_ne!(old, new);
        assert!(service.claim(&old).await.is_none());
        assert!(service.claim(&new).await.is_some());
    }

    /// Tests that codes expire after their TTL.
    ///
    /// Expected: code valid before the TTL and rejected after it
    #[tokio::test(start_paused = true)]
    async fn code_expires_after_ttl() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        sleep(Duration::from_secs(ADMIN_CODE_TTL_SECONDS - 1)).await;
        assert!(service.has_valid_code().await);

        sleep(Duration::from_secs(2)).await;
        assert!(service.claim(&code).await.is_none());
        assert!(!service.has_valid_code().await);
    }

    /// Tests releasing a claimed code.
    ///
    /// Expected: the code is usable again after release
    #[tokio::test]
    async fn released_claim_restores_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        let claim = service.claim(&code).await.unwrap();
        assert!(!service.has_valid_code().await);

        service.release(claim).await;
        assert!(service.has_valid_code().await);
        assert!(service.claim(&code).await.is_some());
    }

    /// Tests that a release never overwrites a newer code.
    ///
    /// Expected: the regenerated code stays, the released one is dropped
    #[tokio::test]
    async fn release_keeps_newer_code() {
        let service = AdminCodeService::new();
        let old = service.generate().await;

        let claim = service.claim(&old).await.unwrap();
        let new = service.generate().await;
        service.release(claim).await;

        assert!(service.claim(&old).await.is_none());
        assert!(service.claim(&new).await.is_some());
    }

    /// Tests that an expired claim is not put back.
    ///
    /// Expected: no valid code after releasing past the TTL
    #[tokio::test(start_paused = true)]
    async fn expired_claim_is_not_restored() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        let claim = service.claim(&code).await.unwrap();
        sleep(Duration::from_secs(ADMIN_CODE_TTL_SECONDS + 1)).await;
        service.release(claim).await;

        assert!(!service.has_valid_code().await);
    }
}
