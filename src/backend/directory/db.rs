//! Database operations for the actor directory
//!
//! Each actor collection is its own table with the same column layout.
//! Table and key-column names cannot be bound as SQL parameters, so each
//! (collection, key) combination maps to its own static statement.

use sqlx::{Row, SqlitePool};

use super::KeyKind;
use crate::shared::messaging::{ActorIdentity, ActorRole};

fn lookup_sql(collection: ActorRole, key: KeyKind) -> &'static str {
    match (collection, key) {
        (ActorRole::Employee, KeyKind::Surrogate) => {
            "SELECT object_id, badge, name, surname, location_id, department_id \
             FROM employees WHERE object_id = $1"
        }
        (ActorRole::Employee, KeyKind::Business) => {
            "SELECT object_id, badge, name, surname, location_id, department_id \
             FROM employees WHERE badge = $1"
        }
        (ActorRole::Admin, KeyKind::Surrogate) => {
            "SELECT object_id, badge, name, surname, location_id, department_id \
             FROM admins WHERE object_id = $1"
        }
        (ActorRole::Admin, KeyKind::Business) => {
            "SELECT object_id, badge, name, surname, location_id, department_id \
             FROM admins WHERE badge = $1"
        }
        (ActorRole::SuperAdmin, KeyKind::Surrogate) => {
            "SELECT object_id, badge, name, surname, location_id, department_id \
             FROM superadmins WHERE object_id = $1"
        }
        (ActorRole::SuperAdmin, KeyKind::Business) => {
            "SELECT object_id, badge, name, surname, location_id, department_id \
             FROM superadmins WHERE badge = $1"
        }
    }
}

fn identity_from_row(row: &sqlx::sqlite::SqliteRow, role: ActorRole) -> ActorIdentity {
    let object_id: String = row.get("object_id");
    let badge: String = row.get("badge");

    // Employees are messaged by badge, admin staff by surrogate key.
    let id = match role {
        ActorRole::Employee => badge,
        ActorRole::Admin | ActorRole::SuperAdmin => object_id,
    };

    ActorIdentity {
        id,
        name: row.get("name"),
        surname: row.get("surname"),
        location_id: row.get("location_id"),
        department_id: row.get("department_id"),
        role,
    }
}

/// Look up one actor collection by one key column
///
/// # Returns
///
/// `Ok(None)` when the collection has no matching record.
pub async fn find_actor(
    pool: &SqlitePool,
    collection: ActorRole,
    key: KeyKind,
    identifier: &str,
) -> Result<Option<ActorIdentity>, sqlx::Error> {
    let row = sqlx::query(lookup_sql(collection, key))
        .bind(identifier)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| identity_from_row(&row, collection)))
}

/// List the full admin + superadmin roster
///
/// Returned in collection order (admins first), each entry tagged with the
/// collection it came from. Filtering happens in the handler with plain
/// string comparison, which tolerates the mixed id formats found in the
/// location/department columns of older records.
pub async fn list_admin_staff(pool: &SqlitePool) -> Result<Vec<ActorIdentity>, sqlx::Error> {
    let mut staff = Vec::new();

    let admins = sqlx::query(
        "SELECT object_id, badge, name, surname, location_id, department_id FROM admins",
    )
    .fetch_all(pool)
    .await?;
    staff.extend(admins.iter().map(|row| identity_from_row(row, ActorRole::Admin)));

    let superadmins = sqlx::query(
        "SELECT object_id, badge, name, surname, location_id, department_id FROM superadmins",
    )
    .fetch_all(pool)
    .await?;
    staff.extend(
        superadmins
            .iter()
            .map(|row| identity_from_row(row, ActorRole::SuperAdmin)),
    );

    Ok(staff)
}
