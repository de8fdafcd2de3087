use crate::{
    constants::CONTACT_RECEIVED_MESSAGE,
    entities::contact::{
        ContactMessage, ContactMessageInsert, ContactReceivedResponse, NewContactMessageRequest,
    },
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles a contact form submission
    pub async fn submit_contact_message(
        &self,
        request: NewContactMessageRequest,
    ) -> Result<ContactReceivedResponse, AppError> {
        let new_msg = ContactMessageInsert::try_from(request)?;

        let stored = self.contact_repo.create_contact_message(&new_msg).await?;
        tracing::info!(message_id = stored.id, "New contact message received");

        Ok(ContactReceivedResponse {
            success: true,
            message: CONTACT_RECEIVED_MESSAGE.to_string(),
        })
    }

    /// Lists all contact messages, newest first
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }
}
