use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::encryption::KdfParams;

/// Stored credential for one user: salted Argon2id hash, never the secret.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCredential {
    pub username: String,

    /// Random per-user salt
    pub salt: [u8; 16],

    /// Argon2id(secret, salt, kdf)
    pub hash: [u8; 32],

    /// Parameters the hash was derived with
    pub kdf: KdfParams,
}

impl std::fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("kdf", &self.kdf)
            .finish_non_exhaustive()
    }
}

/// Proof that a user has authenticated.
///
/// Only `BudgetTracker::login` hands these out, and every per-user
/// operation takes one explicitly. There is no ambient "logged in" state.
///
/// A session is only honoured by the tracker that issued it; presenting it
/// to any other tracker, even one over a copy of the same ledger, fails
/// with `ForeignSession`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session {
    owner: String,
    issuer: Uuid,
}

impl Session {
    pub(crate) fn new(owner: impl Into<String>, issuer: Uuid) -> Self {
        Self {
            owner: owner.into(),
            issuer,
        }
    }

    pub(crate) fn issuer(&self) -> Uuid {
        self.issuer
    }

    /// The authenticated username; scopes every ledger query.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}
