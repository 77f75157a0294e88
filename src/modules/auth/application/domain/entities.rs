use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Back-office operator roles. A closed enum so role checks are typed
/// comparisons instead of string equality scattered across gates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "super_admin")]
    SuperAdmin,
}

impl AdminRole {
    /// Admin-gated endpoints accept both roles.
    pub fn is_admin_level(self) -> bool {
        matches!(self, AdminRole::Admin | AdminRole::SuperAdmin)
    }

    pub fn is_super_admin(self) -> bool {
        matches!(self, AdminRole::SuperAdmin)
    }
}

pub const ADMIN_STATUS_ACTIVE: &str = "active";

/// Admin account as the application layer sees it. The password hash stays
/// inside this record and is never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub status: String,
    pub last_login: Option<DateTime<Utc>>,
}

impl AdminRecord {
    pub fn is_active(&self) -> bool {
        self.status == ADMIN_STATUS_ACTIVE
    }

    pub fn info(&self) -> AdminInfo {
        AdminInfo {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            avatar: self.avatar.clone(),
            role: self.role,
            status: self.status.clone(),
        }
    }
}

/// Public projection of an admin account, safe to return to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub role: AdminRole,
    pub status: String,
}
