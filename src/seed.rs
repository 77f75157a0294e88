use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use tracing::{info, warn};

use crate::auth::adapter::outgoing::sea_orm_entity::admins;
use crate::auth::application::domain::entities::{AdminRole, ADMIN_STATUS_ACTIVE};

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

/// Creates the initial super admin account if no row with the configured
/// username exists yet.
pub async fn seed_default_admin(db: &DatabaseConnection) -> Result<(), DbErr> {
    let username =
        std::env::var("DEFAULT_ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());

    let existing = admins::Entity::find()
        .filter(admins::Column::Username.eq(username.clone()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let password =
        std::env::var("DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());
    if password == DEFAULT_PASSWORD {
        warn!("default admin password in use, change it before going live");
    }
    let email = std::env::var("DEFAULT_ADMIN_EMAIL")
        .unwrap_or_else(|_| "admin@example.com".to_string());

    let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
        .map_err(|e| DbErr::Custom(format!("failed to hash seed password: {}", e)))?;

    let now = Utc::now();
    admins::ActiveModel {
        username: Set(username.clone()),
        password: Set(hash),
        role: Set(AdminRole::SuperAdmin),
        name: Set("Administrator".to_string()),
        email: Set(email),
        phone: Set(String::new()),
        avatar: Set(String::new()),
        status: Set(ADMIN_STATUS_ACTIVE.to_string()),
        last_login: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(username = %username, "seeded default super admin account");
    Ok(())
}
