//! Actor Identity
//!
//! An actor is any identity capable of sending or receiving a message:
//! an employee, an admin or a superadmin. The three live in disjoint
//! collections with no unified table; a resolved identity therefore carries
//! the role of the collection that answered the lookup.

use serde::{Deserialize, Serialize};

/// Which actor collection a resolved identity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Employee,
    Admin,
    #[serde(rename = "superadmin")]
    SuperAdmin,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
        }
    }
}

/// A resolved participant identity (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorIdentity {
    /// The identifier other participants use to message this actor:
    /// the business key for employees, the surrogate key for admin staff
    pub id: String,
    pub name: String,
    pub surname: String,
    pub location_id: String,
    pub department_id: String,
    pub role: ActorRole,
}

/// Wire shape of one entry in the `GET /api/admins` roster
///
/// This endpoint exists for the deployed mobile client, which reads the
/// historic field names (`_id`, `nom`, `prenom`, `departementId`); they are
/// kept verbatim rather than standardized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "prenom")]
    pub name: String,
    #[serde(rename = "nom")]
    pub surname: String,
    #[serde(rename = "locationId")]
    pub location_id: String,
    #[serde(rename = "departementId")]
    pub department_id: String,
    pub role: ActorRole,
}

impl From<&ActorIdentity> for AdminSummary {
    fn from(identity: &ActorIdentity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            surname: identity.surname.clone(),
            location_id: identity.location_id.clone(),
            department_id: identity.department_id.clone(),
            role: identity.role,
        }
    }
}
