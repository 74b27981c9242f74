//! Actor Directory
//!
//! Resolves an opaque participant identifier to a display identity by
//! probing the disjoint actor collections (employee, admin, superadmin)
//! under two key conventions:
//!
//! - the **surrogate key** (`object_id`), the storage-assigned 24-hex
//!   identifier, and
//! - the **business key** (`badge`), the human-meaningful identifier an
//!   employee types into the app.
//!
//! Identifiers arriving from the message log are untyped strings that may
//! belong to either key space; the directory tolerates that ambiguity with
//! an ordered list of probes composed left-to-right with short-circuit.
//! A string that is not even surrogate-shaped simply skips the surrogate
//! probes — a malformed identifier degrades to "no match", it never raises.
//!
//! The directory is read-only and every resolution failure is non-fatal to
//! callers, which substitute empty display fields.

pub mod db;

use sqlx::SqlitePool;

use crate::shared::messaging::{ActorIdentity, ActorRole};

/// A validated surrogate-key-shaped identifier (24 hex characters)
///
/// The parse-then-probe step: `SurrogateKey::parse` returns `None` for a
/// string that cannot possibly be a surrogate key, so lookups degrade to
/// "no match" instead of propagating a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurrogateKey(String);

impl SurrogateKey {
    pub fn parse(identifier: &str) -> Option<Self> {
        if identifier.len() == 24 && identifier.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(identifier.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which key column a probe matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Surrogate,
    Business,
}

/// One (collection, key-field) lookup in a resolution chain
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub collection: ActorRole,
    pub key: KeyKind,
}

/// Resolution order for a messaging counterpart (first match wins):
/// admin by surrogate key, superadmin by surrogate key, admin by business
/// key, superadmin by business key.
const COUNTERPART_PROBES: [Probe; 4] = [
    Probe { collection: ActorRole::Admin, key: KeyKind::Surrogate },
    Probe { collection: ActorRole::SuperAdmin, key: KeyKind::Surrogate },
    Probe { collection: ActorRole::Admin, key: KeyKind::Business },
    Probe { collection: ActorRole::SuperAdmin, key: KeyKind::Business },
];

/// Resolution order for an employee identity. The business key is probed
/// first: employees are almost always referenced by badge, the surrogate
/// key only appears in historic messages.
const EMPLOYEE_PROBES: [Probe; 2] = [
    Probe { collection: ActorRole::Employee, key: KeyKind::Business },
    Probe { collection: ActorRole::Employee, key: KeyKind::Surrogate },
];

/// Read-only identity resolver over the actor collections
///
/// Constructed once at startup with the shared connection pool and injected
/// into the handlers through `AppState`.
#[derive(Clone)]
pub struct ActorDirectory {
    pool: SqlitePool,
}

impl ActorDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve a counterpart identifier against the admin collections
    ///
    /// Runs the admin/superadmin probe chain and short-circuits on the
    /// first match. Returns `Ok(None)` when no collection answers; callers
    /// render empty display fields in that case.
    pub async fn resolve(&self, identifier: &str) -> Result<Option<ActorIdentity>, sqlx::Error> {
        self.run_probes(&COUNTERPART_PROBES, identifier).await
    }

    /// Resolve an identifier against the employee collection
    ///
    /// Used by the conversation index to capture the creation-time peer
    /// snapshot.
    pub async fn resolve_employee(
        &self,
        identifier: &str,
    ) -> Result<Option<ActorIdentity>, sqlx::Error> {
        self.run_probes(&EMPLOYEE_PROBES, identifier).await
    }

    async fn run_probes(
        &self,
        probes: &[Probe],
        identifier: &str,
    ) -> Result<Option<ActorIdentity>, sqlx::Error> {
        let surrogate = SurrogateKey::parse(identifier);

        for probe in probes {
            let found = match probe.key {
                KeyKind::Surrogate => match &surrogate {
                    Some(key) => {
                        db::find_actor(&self.pool, probe.collection, KeyKind::Surrogate, key.as_str())
                            .await?
                    }
                    // not surrogate-shaped, skip rather than fail
                    None => None,
                },
                KeyKind::Business => {
                    db::find_actor(&self.pool, probe.collection, KeyKind::Business, identifier)
                        .await?
                }
            };
            if let Some(identity) = found {
                tracing::debug!(
                    identifier,
                    collection = identity.role.as_str(),
                    "directory probe matched"
                );
                return Ok(Some(identity));
            }
        }

        tracing::debug!(identifier, "directory resolution found no match");
        Ok(None)
    }
}
