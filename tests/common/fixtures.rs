//! Actor fixtures
//!
//! Helpers to seed the three actor collections directly, bypassing the
//! registration surface that is out of scope for this subsystem.

use sqlx::SqlitePool;

/// Deterministic 24-hex surrogate key for tests
pub fn object_id(n: u64) -> String {
    format!("{:024x}", n)
}

async fn seed_actor(
    pool: &SqlitePool,
    table: &str,
    object_id: &str,
    badge: &str,
    name: &str,
    surname: &str,
    location_id: &str,
    department_id: &str,
) {
    let sql = format!(
        "INSERT INTO {} (object_id, badge, name, surname, location_id, department_id) \
         VALUES ($1, $2, $3, $4, $5, $6)",
        table
    );
    sqlx::query(&sql)
        .bind(object_id)
        .bind(badge)
        .bind(name)
        .bind(surname)
        .bind(location_id)
        .bind(department_id)
        .execute(pool)
        .await
        .expect("failed to seed actor");
}

pub async fn seed_employee(
    pool: &SqlitePool,
    object_id: &str,
    badge: &str,
    name: &str,
    surname: &str,
    location_id: &str,
    department_id: &str,
) {
    seed_actor(pool, "employees", object_id, badge, name, surname, location_id, department_id)
        .await;
}

pub async fn seed_admin(
    pool: &SqlitePool,
    object_id: &str,
    badge: &str,
    name: &str,
    surname: &str,
    location_id: &str,
    department_id: &str,
) {
    seed_actor(pool, "admins", object_id, badge, name, surname, location_id, department_id).await;
}

pub async fn seed_superadmin(
    pool: &SqlitePool,
    object_id: &str,
    badge: &str,
    name: &str,
    surname: &str,
    location_id: &str,
    department_id: &str,
) {
    seed_actor(pool, "superadmins", object_id, badge, name, surname, location_id, department_id)
        .await;
}
