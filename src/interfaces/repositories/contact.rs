use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    db::postgres::Database,
    entities::contact::{ContactMessage, ContactMessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

#[async_trait]
impl<T> ContactRepository for Arc<T>
where
    T: ContactRepository + ?Sized,
{
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<ContactMessage, AppError> {
        (**self).create_contact_message(msg).await
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        (**self).list_contact_messages().await
    }
}

impl SqlxContactRepo {
    pub fn new(db: Database) -> Self {
        SqlxContactRepo { db }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact_message(&self, msg: &ContactMessageInsert) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(self.db.pool()?)
        .await?;

        Ok(message)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.db.pool()?)
        .await?;

        Ok(messages)
    }
}
