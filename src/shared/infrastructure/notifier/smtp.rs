// SMTP implementation of the Notifier port, on lettre's tokio transport.

use crate::shared::infrastructure::notifier::{Notifier, NotifierError, OutboundEmail};
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// STARTTLS when set, plain connection otherwise (local relays only).
    pub use_tls: bool,
    pub from_address: String,
}

pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: Address,
}

impl SmtpNotifier {
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotifierError> {
        let from_address: Address = settings
            .from_address
            .parse()
            .map_err(|e| NotifierError::InvalidAddress(format!("{}: {e}", settings.from_address)))?;

        let builder = if settings.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .map_err(|e| NotifierError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        }
        .port(settings.port);

        let builder = match (&settings.username, &settings.password) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            mailer: builder.build(),
            from_address,
        })
    }

    fn build_message(&self, email: OutboundEmail) -> Result<Message, NotifierError> {
        let from = Mailbox::new(Some(email.from_display_name), self.from_address.clone());
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| NotifierError::InvalidAddress(format!("{}: {e}", email.to)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.plain_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body),
                    ),
            )
            .map_err(|e| NotifierError::Build(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifierError> {
        let recipient = email.to.clone();
        let message = self.build_message(email)?;
        self.mailer
            .send(message)
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;
        tracing::info!(to = %recipient, "confirmation email sent");
        Ok(())
    }
}

#[cfg(test)]
mod smtp_notifier_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "localhost".into(),
            port: 1025,
            username: None,
            password: None,
            use_tls: false,
            from_address: "noreply@example.com".into(),
        }
    }

    fn email(to: &str) -> OutboundEmail {
        OutboundEmail {
            to: to.into(),
            subject: "We have received your registration!".into(),
            plain_body: "plain".into(),
            html_body: "<p>html</p>".into(),
            from_display_name: "Organisers".into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_sender_address(mut settings: SmtpSettings) {
        settings.from_address = "not an address".into();
        let result = SmtpNotifier::new(&settings);
        assert!(matches!(result, Err(NotifierError::InvalidAddress(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_recipient_before_connecting(settings: SmtpSettings) {
        let notifier = SmtpNotifier::new(&settings).expect("notifier failed");
        let result = notifier.send(email("nobody")).await;
        assert!(matches!(result, Err(NotifierError::InvalidAddress(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_build_a_multipart_message(settings: SmtpSettings) {
        let notifier = SmtpNotifier::new(&settings).expect("notifier failed");
        let message = notifier
            .build_message(email("a@b.com"))
            .expect("build failed");
        let formatted = String::from_utf8(message.formatted()).expect("utf8");
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("Organisers"));
        assert!(formatted.contains("a@b.com"));
    }
}
