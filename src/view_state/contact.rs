use std::{fmt, sync::LazyLock};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("⚠️ Please fill in all required fields marked with * (missing: {})", field_list(.0))]
    MissingFields(Vec<Field>),
    #[error("⚠️ Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffFailure {
    #[error("couldn't open the messaging link")]
    OpenFailed,
    #[error("couldn't write to the clipboard")]
    ClipboardFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("WhatsApp number `{0}` must be 1 to 15 digits with an optional leading +")]
pub struct InvalidNumber(pub String);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// The message sent to the messaging client.
    pub fn compose_message(&self) -> String {
        let phone = self.phone.trim();
        let phone_line = if phone.is_empty() {
            String::new()
        } else {
            format!("• Phone: {phone}\n")
        };
        format!(
            "🌟 *New inquiry from the website!*\n\
             \n\
             👤 *Personal details:*\n\
             • Name: {name}\n\
             • Email: {email}\n\
             {phone_line}\
             \n\
             🎯 *Project details:*\n\
             • Subject: {subject}\n\
             • Description: {message}\n\
             \n\
             💼 *Request:*\n\
             I'd like to get a professional quote.\n\
             Happy to set up a consultation!\n\
             Thanks 🚀",
            name = self.name.trim(),
            email = self.email.trim(),
            subject = self.subject.trim(),
            message = self.message.trim(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// E.164 number; a leading `+` is ignored.
    pub whatsapp_number: String,
    pub email: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            whatsapp_number: "15550100200".to_string(),
            email: "hello@example.com".to_string(),
        }
    }
}

impl ContactSettings {
    pub fn number(&self) -> &str {
        self.whatsapp_number.trim().trim_start_matches('+')
    }

    /// Checks the number is bare E.164 digits, so it can go straight into a deep link.
    pub fn validate(&self) -> Result<(), InvalidNumber> {
        let number = self.number();
        if (1..=15).contains(&number.len()) && number.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(InvalidNumber(self.whatsapp_number.clone()))
        }
    }

    pub fn deep_link(&self, message: &str) -> String {
        deep_link(self.number(), message)
    }
}

/// `https://wa.me/<number>?text=<message>`, with the message encoded once.
pub fn deep_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Browser-side effects the submit flow branches on.
#[allow(async_fn_in_trait)]
pub trait Handoff {
    fn confirm(&self, prompt: &str) -> bool;
    /// Opens `url` in a new browsing context; `false` if it was blocked.
    fn open(&self, url: &str) -> bool;
    async fn copy_to_clipboard(&self, text: &str) -> bool;
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The user backed out at the send confirmation.
    Declined,
    Sent { cleared: bool },
    Copied,
    ManualFallback,
}

impl DispatchOutcome {
    /// Handoff tiers that failed before this outcome was reached, in order.
    pub fn failures(&self) -> &'static [HandoffFailure] {
        match self {
            DispatchOutcome::Declined | DispatchOutcome::Sent { .. } => &[],
            DispatchOutcome::Copied => &[HandoffFailure::OpenFailed],
            DispatchOutcome::ManualFallback => {
                &[HandoffFailure::OpenFailed, HandoffFailure::ClipboardFailed]
            }
        }
    }
}

/// A validated, composed message ready to leave the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    message: String,
    link: String,
    settings: ContactSettings,
}

impl Submission {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn send_prompt(&self) -> String {
        format!(
            "📱 Send this message on WhatsApp?\n\
             It will go to: +{}\n\
             Press OK to open WhatsApp or Cancel to keep editing.",
            self.settings.number()
        )
    }

    pub fn clear_prompt(&self) -> String {
        "✅ WhatsApp opened!\n\
         🔔 Don't forget to press send in WhatsApp.\n\
         Clear the form?"
            .to_string()
    }

    pub fn clipboard_text(&self) -> String {
        format!("Message: {}\nPhone: +{}", self.message, self.settings.number())
    }

    pub fn copied_notice(&self) -> String {
        format!(
            "⚠️ Couldn't open WhatsApp automatically.\n\
             📋 The details were copied to your clipboard!\n\
             📱 Open WhatsApp and send them to: +{}",
            self.settings.number()
        )
    }

    pub fn manual_notice(&self) -> String {
        format!(
            "⚠️ Couldn't open WhatsApp automatically.\n\
             📱 Please reach out directly:\n\
             Phone: +{}\n\
             Email: {}",
            self.settings.number(),
            self.settings.email
        )
    }

    pub async fn dispatch(&self, handoff: &impl Handoff) -> DispatchOutcome {
        if !handoff.confirm(&self.send_prompt()) {
            log::debug!("send declined");
            return DispatchOutcome::Declined;
        }
        if handoff.open(&self.link) {
            let cleared = handoff.confirm(&self.clear_prompt());
            return DispatchOutcome::Sent { cleared };
        }
        let outcome = if handoff.copy_to_clipboard(&self.clipboard_text()).await {
            handoff.notify(&self.copied_notice());
            DispatchOutcome::Copied
        } else {
            handoff.notify(&self.manual_notice());
            DispatchOutcome::ManualFallback
        };
        for failure in outcome.failures() {
            log::warn!("{failure}");
        }
        outcome
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormController {
    form: ContactForm,
    settings: ContactSettings,
}

impl ContactFormController {
    pub fn new(settings: ContactSettings) -> Self {
        Self {
            form: ContactForm::default(),
            settings,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn settings(&self) -> &ContactSettings {
        &self.settings
    }

    pub fn field(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    pub fn prepare(&self) -> Result<Submission, ValidationError> {
        self.form.validate()?;
        let message = self.form.compose_message();
        let link = self.settings.deep_link(&message);
        Ok(Submission {
            message,
            link,
            settings: self.settings.clone(),
        })
    }

    /// Clears the form only when the user asked for it after a successful handoff.
    pub fn apply(&mut self, outcome: DispatchOutcome) {
        if outcome == (DispatchOutcome::Sent { cleared: true }) {
            log::debug!("contact form cleared");
            self.form = ContactForm::default();
        }
    }

    pub async fn submit(
        &mut self,
        handoff: &impl Handoff,
    ) -> Result<DispatchOutcome, ValidationError> {
        let submission = self.prepare()?;
        let outcome = submission.dispatch(handoff).await;
        self.apply(outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use pollster::block_on;

    use super::*;

    #[derive(Default)]
    struct RecordingHandoff {
        answers: RefCell<VecDeque<bool>>,
        open_ok: bool,
        clipboard_ok: bool,
        prompts: RefCell<Vec<String>>,
        opened: RefCell<Vec<String>>,
        copied: RefCell<Vec<String>>,
        notices: RefCell<Vec<String>>,
    }

    impl RecordingHandoff {
        fn new(answers: &[bool], open_ok: bool, clipboard_ok: bool) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                open_ok,
                clipboard_ok,
                ..Default::default()
            }
        }
    }

    impl Handoff for RecordingHandoff {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }

        fn open(&self, url: &str) -> bool {
            self.opened.borrow_mut().push(url.to_string());
            self.open_ok
        }

        async fn copy_to_clipboard(&self, text: &str) -> bool {
            self.copied.borrow_mut().push(text.to_string());
            self.clipboard_ok
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn dana() -> ContactFormController {
        let mut c = ContactFormController::new(ContactSettings::default());
        c.set_field(Field::Name, "Dana");
        c.set_field(Field::Email, "d@x.com");
        c.set_field(Field::Subject, "Site");
        c.set_field(Field::Message, "Need a site");
        c
    }

    #[test]
    fn test_message_without_phone() {
        let message = dana().form().compose_message();
        assert!(message.contains("*Personal details:*"));
        assert!(message.contains("• Name: Dana"));
        assert!(message.contains("• Email: d@x.com"));
        assert!(message.contains("*Project details:*"));
        assert!(message.contains("• Subject: Site"));
        assert!(message.contains("• Description: Need a site"));
        assert!(message.contains("*Request:*"));
        assert!(!message.contains("Phone"));
    }

    #[test]
    fn test_message_with_phone() {
        let mut c = dana();
        c.set_field(Field::Phone, " 050-1234567 ");
        let message = c.form().compose_message();
        assert!(message.contains("• Email: d@x.com\n• Phone: 050-1234567\n"));
    }

    #[test]
    fn test_required_fields() {
        let mut c = dana();
        c.set_field(Field::Subject, "   ");
        c.set_field(Field::Name, "");
        assert_eq!(
            c.prepare(),
            Err(ValidationError::MissingFields(vec![
                Field::Name,
                Field::Subject
            ]))
        );
        let err = c.prepare().unwrap_err().to_string();
        assert!(err.contains("name, subject"));
    }

    #[test]
    fn test_phone_is_never_required() {
        assert!(dana().prepare().is_ok());
    }

    #[test]
    fn test_email_format() {
        let mut c = dana();
        c.set_field(Field::Email, "dana at example");
        assert_eq!(c.prepare(), Err(ValidationError::InvalidEmail));
        c.set_field(Field::Email, " dana@example.co.il ");
        assert!(c.prepare().is_ok());
    }

    #[test]
    fn test_deep_link_encodes_once() {
        assert_eq!(
            deep_link("15550100200", "Hi there & thanks!\n(100%)"),
            "https://wa.me/15550100200?text=Hi%20there%20%26%20thanks!%0A(100%25)"
        );
        assert_eq!(
            deep_link("1", "שלום"),
            "https://wa.me/1?text=%D7%A9%D7%9C%D7%95%D7%9D"
        );
    }

    #[test]
    fn test_leading_plus_is_dropped_from_number() {
        let settings = ContactSettings {
            whatsapp_number: "+972500000000".to_string(),
            email: "a@b.co".to_string(),
        };
        assert!(settings.deep_link("x").starts_with("https://wa.me/972500000000?text="));
    }

    #[test]
    fn test_number_must_be_digits() {
        let settings = |n: &str| ContactSettings {
            whatsapp_number: n.to_string(),
            email: "a@b.co".to_string(),
        };
        assert!(settings("15550100200").validate().is_ok());
        assert!(settings(" +972500000000 ").validate().is_ok());
        assert_eq!(
            settings("+972 54-746-6508").validate(),
            Err(InvalidNumber("+972 54-746-6508".to_string()))
        );
        assert!(settings("").validate().is_err());
        assert!(settings("+").validate().is_err());
        assert!(settings("1234567890123456").validate().is_err());
    }

    #[test]
    fn test_declined_confirmation_changes_nothing() {
        let mut c = dana();
        let before = c.form().clone();
        let handoff = RecordingHandoff::new(&[false], true, true);
        assert_eq!(block_on(c.submit(&handoff)), Ok(DispatchOutcome::Declined));
        assert_eq!(c.form(), &before);
        assert!(handoff.opened.borrow().is_empty());
        assert!(handoff.prompts.borrow()[0].contains("+15550100200"));
    }

    #[test]
    fn test_sent_and_cleared() {
        let mut c = dana();
        let handoff = RecordingHandoff::new(&[true, true], true, true);
        assert_eq!(
            block_on(c.submit(&handoff)),
            Ok(DispatchOutcome::Sent { cleared: true })
        );
        assert!(c.form().is_empty());
        let opened = handoff.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/15550100200?text="));
    }

    #[test]
    fn test_sent_but_kept() {
        let mut c = dana();
        let handoff = RecordingHandoff::new(&[true, false], true, true);
        assert_eq!(
            block_on(c.submit(&handoff)),
            Ok(DispatchOutcome::Sent { cleared: false })
        );
        assert_eq!(c.field(Field::Name), "Dana");
    }

    #[test]
    fn test_blocked_open_copies_to_clipboard() {
        let mut c = dana();
        let handoff = RecordingHandoff::new(&[true], false, true);
        let outcome = block_on(c.submit(&handoff)).unwrap();
        assert_eq!(outcome, DispatchOutcome::Copied);
        assert_eq!(outcome.failures(), &[HandoffFailure::OpenFailed]);
        let notices = handoff.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("copied to your clipboard"));
        assert!(!notices[0].contains("reach out directly"));
        let copied = handoff.copied.borrow();
        assert!(copied[0].starts_with("Message: 🌟"));
        assert!(copied[0].ends_with("Phone: +15550100200"));
        assert_eq!(c.field(Field::Message), "Need a site");
    }

    #[test]
    fn test_clipboard_failure_shows_manual_contact() {
        let mut c = dana();
        let handoff = RecordingHandoff::new(&[true], false, false);
        let outcome = block_on(c.submit(&handoff)).unwrap();
        assert_eq!(outcome, DispatchOutcome::ManualFallback);
        assert_eq!(
            outcome.failures(),
            &[HandoffFailure::OpenFailed, HandoffFailure::ClipboardFailed]
        );
        let notices = handoff.notices.borrow();
        assert!(notices[0].contains("Phone: +15550100200"));
        assert!(notices[0].contains("Email: hello@example.com"));
        assert!(!c.form().is_empty());
    }

    #[test]
    fn test_invalid_form_produces_no_side_effects() {
        let mut c = dana();
        c.set_field(Field::Message, "\t");
        let handoff = RecordingHandoff::new(&[true, true], true, true);
        assert!(block_on(c.submit(&handoff)).is_err());
        assert!(handoff.prompts.borrow().is_empty());
        assert!(handoff.opened.borrow().is_empty());
        assert_eq!(c.field(Field::Name), "Dana");
    }

    #[test]
    fn test_successful_outcomes_record_no_failures() {
        assert!(DispatchOutcome::Declined.failures().is_empty());
        assert!(DispatchOutcome::Sent { cleared: false }.failures().is_empty());
        assert!(DispatchOutcome::Sent { cleared: true }.failures().is_empty());
    }
}
