use uuid::Uuid;

use crate::{db::Store, error::AppError};

use super::model::User;

#[derive(Clone)]
pub struct AuthRepository {
  store: Store,
}

impl AuthRepository {
  pub fn new(store: Store) -> Self {
      Self { store }
  }

  pub async fn create_user(&self, user: User) -> Result<User, AppError> {
      // Emails are unique, compared case-insensitively
      let created = self.store.users.insert_if_absent(
          |u| u.email.eq_ignore_ascii_case(&user.email),
          user.clone(),
      )?;

      if !created {
          return Err(AppError::ConflictError("Email already in use".into()));
      }

      Ok(user)
  }

  pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
      self.store
          .users
          .find_one(|u| u.email.eq_ignore_ascii_case(email))
  }

  pub async fn find_user_by_id(&self, id: &Uuid) -> Result<User, AppError> {
      self.store
          .users
          .find_one(|u| u.id == *id)?
          .ok_or_else(|| AppError::NotFoundError(format!("User with ID {} not found", id)))
  }

  pub async fn credit_points(&self, user_id: &Uuid, delta: i64) -> Result<User, AppError> {
      self.store
          .users
          .update_one(|u| u.id == *user_id, |u| u.points += delta)?
          .ok_or_else(|| AppError::NotFoundError(format!("User with ID {} not found", user_id)))
  }

  pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
      self.store.users.all()
  }

  pub async fn delete_user(&self, user_id: &Uuid) -> Result<bool, AppError> {
      let removed = self.store.users.delete_where(|u| u.id == *user_id)?;
      Ok(removed > 0)
  }

  pub async fn count_users(&self) -> Result<usize, AppError> {
      self.store.users.count(|_| true)
  }
}
