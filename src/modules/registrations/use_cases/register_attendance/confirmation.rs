// Confirmation mail copy for an accepted registration.

use crate::shared::infrastructure::notifier::OutboundEmail;
use tera::{Context, Tera};

const SUBJECT: &str = "We have received your registration!";

const PLAIN_TEMPLATE: &str = r#"We have received your registration!

Hello!

Thank you for registering for {{ workshop_title }}.

YOUR REGISTRATION
Preferred date: {{ date_label }}
Attendees: {{ attendees }}

The final date is chosen once voting closes: we pick the date most attendees asked for.
You will receive a second email with the confirmed date, venue and agenda.
{% if results_url %}
Current results: {{ results_url }}
{% endif %}{% if contact_email %}
Questions or suggestions? Write to {{ contact_email }}.
{% endif %}
---
{{ organiser_name }}{% if site_url %}
{{ site_url }}{% endif %}
"#;

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="font-size: 24px;">We have received your registration!</h1>
  <p>Hello!</p>
  <p>Thank you for registering for <strong>{{ workshop_title }}</strong>.</p>
  <div style="border-left: 4px solid #667eea; padding: 12px 20px; margin: 20px 0;">
    <p><strong>Preferred date:</strong> {{ date_label }}</p>
    <p><strong>Attendees:</strong> {{ attendees }}</p>
  </div>
  <p>The final date is chosen once voting closes: we pick the date most attendees asked for.
  You will receive a second email with the confirmed date, venue and agenda.</p>
  {% if results_url %}<p><a href="{{ results_url }}">Current results</a></p>{% endif %}
  {% if contact_email %}<p>Questions or suggestions? Write to <a href="mailto:{{ contact_email }}">{{ contact_email }}</a>.</p>{% endif %}
  <p style="text-align: center; color: #666; font-size: 14px; border-top: 1px solid #ddd; padding-top: 20px;">
    {{ organiser_name }}{% if site_url %}<br><a href="{{ site_url }}">{{ site_url }}</a>{% endif %}
  </p>
</body>
</html>
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationTemplate {
    pub workshop_title: String,
    pub organiser_name: String,
    pub results_url: Option<String>,
    pub contact_email: Option<String>,
    pub site_url: Option<String>,
}

impl Default for ConfirmationTemplate {
    fn default() -> Self {
        Self {
            workshop_title: "Workshop".into(),
            organiser_name: "Workshop Registration".into(),
            results_url: None,
            contact_email: None,
            site_url: None,
        }
    }
}

impl ConfirmationTemplate {
    pub fn render(
        &self,
        to: &str,
        date_label: &str,
        attendees: &str,
    ) -> Result<OutboundEmail, tera::Error> {
        let mut context = Context::new();
        context.insert("workshop_title", &self.workshop_title);
        context.insert("organiser_name", &self.organiser_name);
        context.insert("results_url", &self.results_url);
        context.insert("contact_email", &self.contact_email);
        context.insert("site_url", &self.site_url);
        context.insert("date_label", date_label);
        context.insert("attendees", attendees);

        Ok(OutboundEmail {
            to: to.to_string(),
            subject: SUBJECT.to_string(),
            plain_body: Tera::one_off(PLAIN_TEMPLATE, &context, false)?,
            html_body: Tera::one_off(HTML_TEMPLATE, &context, true)?,
            from_display_name: self.organiser_name.clone(),
        })
    }
}
