use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tokio::task;

use crate::domain::CatalogError;
use crate::entities::users;

/// User data returned from repository (without the password hash)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Create a user, storing an Argon2id hash of `password`
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<User, CatalogError> {
        let password = password.to_string();
        // Hashing is CPU-bound, keep it off the async workers
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| CatalogError::Internal(format!("Password hashing task panicked: {e}")))??;

        let txn = self.conn.begin().await?;

        let user = users::ActiveModel {
            email: Set(email.to_string()),
            password: Set(password_hash),
            is_active: Set(is_active),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            CatalogError::from_write(e, || format!("User '{email}' already exists"))
        })?;

        txn.commit().await?;
        Ok(User::from(user))
    }

    pub async fn list(&self) -> Result<Vec<User>, CatalogError> {
        let users = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, CatalogError> {
        let user = users::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(user.map(User::from))
    }

    /// Get user by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, CatalogError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await?;

        Ok(user.map(User::from))
    }

    /// Verify password for a user. Unknown emails and inactive users never match.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<bool, CatalogError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await?;

        let Some(user) = user.filter(|u| u.is_active) else {
            return Ok(false);
        };

        let password_hash = user.password;
        let password = password.to_string();

        task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash).map_err(|e| {
                CatalogError::Internal(format!("Invalid password hash format: {e}"))
            })?;

            Ok::<bool, CatalogError>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .map_err(|e| CatalogError::Internal(format!("Password verification task panicked: {e}")))?
    }
}

/// Hash a password using Argon2id with default params
pub fn hash_password(password: &str) -> Result<String, CatalogError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CatalogError::Internal(format!("Failed to hash password: {e}")))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_salted_phc_string() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(!first.contains("hunter2"));
    }
}
