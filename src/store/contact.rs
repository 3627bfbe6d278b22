//! The store's contact page: published contact details plus a message form.

use crate::clients::StoreClient;
use crate::framework::Validate;
use crate::model::{ContactDetail, ContactMessage};
use crate::notify::{Notification, Notifier};
use crate::page::PageState;
use crate::store::{StoreError, StorePage};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Form status shown under the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub sending: bool,
    /// Inline error text; cleared when a new submission starts.
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct ContactPage {
    store: StorePage,
    client: StoreClient,
    notifier: Arc<dyn Notifier>,
    form: Arc<watch::Sender<ContactFormState>>,
}

impl ContactPage {
    pub fn new(client: StoreClient, domain: impl Into<String>, notifier: Arc<dyn Notifier>) -> Self {
        let (form, _) = watch::channel(ContactFormState::default());
        Self {
            store: StorePage::new(client.clone(), domain),
            client,
            notifier,
            form: Arc::new(form),
        }
    }

    /// Loads the store whose contact details are shown next to the form.
    pub async fn load(&self) -> Result<(), StoreError> {
        self.store.load().await.map(|_| ())
    }

    pub fn store(&self) -> &StorePage {
        &self.store
    }

    /// Contact details of the loaded store; empty until it loads.
    pub fn contact_details(&self) -> Vec<ContactDetail> {
        match self.store.state() {
            PageState::Ready(store) => store.contact_details(),
            _ => Vec::new(),
        }
    }

    pub fn form(&self) -> ContactFormState {
        self.form.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactFormState> {
        self.form.subscribe()
    }

    /// Validates and sends the message.
    ///
    /// Failures are shown inline on the form rather than as a notification.
    #[instrument(skip(self, message), fields(domain = %self.store.domain()))]
    pub async fn submit(&self, message: &ContactMessage) -> Result<(), StoreError> {
        self.form.send_replace(ContactFormState {
            sending: true,
            error: None,
        });

        let result = match message.validate() {
            Ok(()) => self.client.send_contact(self.store.domain(), message).await,
            Err(reason) => Err(StoreError::InvalidContact(reason)),
        };

        let error = match &result {
            Ok(()) => {
                info!("Contact message sent");
                self.notifier
                    .notify(Notification::success("Your message has been sent successfully"));
                None
            }
            Err(StoreError::InvalidContact(reason)) => Some(reason.clone()),
            Err(e) => {
                warn!(error = %e, "Failed to send message");
                Some("Failed to send message".to_string())
            }
        };
        self.form.send_replace(ContactFormState {
            sending: false,
            error,
        });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::notify::NotificationCenter;
    use reqwest::Method;
    use serde_json::json;

    fn page(mock: &MockTransport) -> (ContactPage, NotificationCenter) {
        let notifications = NotificationCenter::default();
        let page = ContactPage::new(
            StoreClient::new(mock.client()),
            "gamevault",
            Arc::new(notifications.clone()),
        );
        (page, notifications)
    }

    #[tokio::test]
    async fn test_failed_send_is_inline_not_a_toast() {
        let mock = MockTransport::new();
        mock.expect(Method::POST, "/api/store/gamevault/contact").return_status(500);
        let (page, notifications) = page(&mock);
        let mut toasts = notifications.subscribe();

        let message = ContactMessage::new("Rahim", "rahim@example.com", "Order", "Where is my code?");
        assert!(page.submit(&message).await.is_err());

        assert_eq!(
            page.form(),
            ContactFormState {
                sending: false,
                error: Some("Failed to send message".into()),
            }
        );
        assert!(toasts.try_recv().is_err());
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_message_is_not_sent() {
        let mock = MockTransport::new();
        let (page, _) = page(&mock);

        let message = ContactMessage::new("Rahim", "not-an-email", "Order", "Hi");
        let result = page.submit(&message).await;

        assert!(matches!(result, Err(StoreError::InvalidContact(_))));
        assert!(page.form().error.is_some());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_success_clears_error_and_notifies() {
        let mock = MockTransport::new();
        mock.expect(Method::POST, "/api/store/gamevault/contact").return_status(500);
        mock.expect(Method::POST, "/api/store/gamevault/contact").return_status(201);
        let (page, notifications) = page(&mock);
        let mut toasts = notifications.subscribe();

        let message = ContactMessage::new("Rahim", "rahim@example.com", "Order", "Where is my code?");
        assert!(page.submit(&message).await.is_err());
        page.submit(&message).await.unwrap();

        assert_eq!(page.form(), ContactFormState::default());
        assert_eq!(
            toasts.try_recv().unwrap().description,
            "Your message has been sent successfully"
        );
        assert_eq!(
            mock.requests()[1].body,
            Some(json!({
                "name": "Rahim",
                "email": "rahim@example.com",
                "subject": "Order",
                "message": "Where is my code?"
            }))
        );
    }
}
