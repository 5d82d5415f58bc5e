use std::{fmt, sync::LazyLock};

use api::contact::{ContactDraft, SubmitContactResp, SubmitFuture, Submitter};
use regex::Regex;
use tracing::{debug, warn};

use crate::{
    EMAIL_REGEX,
    banner::{BannerKind, BannerSlot},
    config::ContactConfig,
};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email regex is valid"));

pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const SUCCESS_MESSAGE: &str =
    "Thanks for reaching out! I'll get back to you within 24 hours.";
pub const FAILURE_MESSAGE: &str =
    "Oops! Something went wrong. Please try again or email me directly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
    Budget,
    Timeline,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Subject,
        Field::Message,
        Field::Budget,
        Field::Timeline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Budget | Field::Timeline)
    }

    pub fn value(self, draft: &ContactDraft) -> &str {
        match self {
            Field::FirstName => &draft.first_name,
            Field::LastName => &draft.last_name,
            Field::Email => &draft.email,
            Field::Subject => &draft.subject,
            Field::Message => &draft.message,
            Field::Budget => draft.budget.as_deref().unwrap_or_default(),
            Field::Timeline => draft.timeline.as_deref().unwrap_or_default(),
        }
    }

    // optional fields treat an empty value as unset
    pub fn set(self, draft: &mut ContactDraft, value: String) {
        let optional = |value: String| (!value.is_empty()).then_some(value);

        match self {
            Field::FirstName => draft.first_name = value,
            Field::LastName => draft.last_name = value,
            Field::Email => draft.email = value,
            Field::Subject => draft.subject = value,
            Field::Message => draft.message = value,
            Field::Budget => draft.budget = optional(value),
            Field::Timeline => draft.timeline = optional(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    InvalidEmail,
    TooLong { max: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing => write!(f, "This field is required."),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address."),
            FieldError::TooLong { max } => write!(f, "Please keep this under {max} characters."),
        }
    }
}

// the same constraints the browser checks on the rendered inputs
//
// only email values are trimmed, since browsers strip surrounding whitespace from email
// inputs and nothing else.  a whitespace-only text field is present as far as `required`
// is concerned
pub fn validate_field(field: Field, value: &str, max_chars: usize) -> Result<(), FieldError> {
    let value = match field {
        Field::Email => value.trim(),
        _ => value,
    };

    if value.is_empty() {
        return match field.required() {
            true => Err(FieldError::Missing),
            false => Ok(()),
        };
    }

    match field {
        Field::Email if !EMAIL.is_match(value) => Err(FieldError::InvalidEmail),
        Field::Message if value.chars().count() > max_chars => {
            Err(FieldError::TooLong { max: max_chars })
        }
        _ => Ok(()),
    }
}

pub fn validate_draft(draft: &ContactDraft, max_chars: usize) -> Vec<(Field, FieldError)> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, field.value(draft), max_chars)
                .err()
                .map(|err| (field, err))
        })
        .collect()
}

// live styling of a single input: set on blur, cleared on input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMark {
    #[default]
    Unmarked,
    Valid,
    Invalid,
}

impl FieldMark {
    pub fn on_blur(field: Field, value: &str, max_chars: usize) -> Self {
        match validate_field(field, value, max_chars) {
            Ok(()) => FieldMark::Valid,
            Err(_) => FieldMark::Invalid,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FieldMark::Unmarked => "",
            FieldMark::Valid => "is-valid",
            FieldMark::Invalid => "is-invalid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterStatus {
    pub text: String,
    pub warning: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterCounter {
    max: usize,
    warning_ratio: f64,
}

impl CharacterCounter {
    pub fn new(max: usize, warning_ratio: f64) -> Self {
        CharacterCounter { max, warning_ratio }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn status(&self, value: &str) -> CounterStatus {
        let len = value.chars().count();

        CounterStatus {
            text: format!("{len} / {} characters", self.max),
            warning: len as f64 > self.max as f64 * self.warning_ratio,
        }
    }

    // input is capped at max, as a maxlength attribute would
    pub fn clamp(&self, value: &str) -> String {
        value.chars().take(self.max).collect()
    }
}

pub enum SubmitDecision {
    // validation failed; nothing was sent
    Rejected(Vec<(Field, FieldError)>),
    // a submission is already in flight
    Busy,
    Sent(SubmitFuture),
}

// what the page has to do once a submission settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitSettled {
    pub reset_form: bool,
    // generation of a banner that should be dismissed after banner_dismiss_ms
    pub dismiss: Option<u64>,
}

// contact form state
//
// owns the validated/busy flags and the banner, and decides when the submitter is
// allowed to run.  the component mirrors these flags into classes and attributes
#[derive(Clone, Debug)]
pub struct ContactForm {
    config: ContactConfig,
    banner: BannerSlot,
    was_validated: bool,
    busy: bool,
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        ContactForm {
            config,
            banner: BannerSlot::default(),
            was_validated: false,
            busy: false,
        }
    }

    pub fn counter(&self) -> CharacterCounter {
        CharacterCounter::new(self.config.message_max_chars, self.config.warning_ratio)
    }

    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn banner(&self) -> &BannerSlot {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut BannerSlot {
        &mut self.banner
    }

    fn mark_invalid(&mut self) {
        self.was_validated = true;
        self.banner.show(BannerKind::Error, INVALID_FORM_MESSAGE);
    }

    // browser_valid is the verdict of the browser's own constraint check on the rendered
    // form.  either that or the draft rules failing keeps the submitter from running
    pub fn submit<S: Submitter>(
        &mut self,
        draft: &ContactDraft,
        browser_valid: bool,
        submitter: &mut S,
    ) -> SubmitDecision {
        if self.busy {
            return SubmitDecision::Busy;
        }

        let errors = validate_draft(draft, self.config.message_max_chars);
        if !errors.is_empty() || !browser_valid {
            debug!(
                "contact form rejected: {} invalid fields, browser check passed: {browser_valid}",
                errors.len()
            );
            self.mark_invalid();
            return SubmitDecision::Rejected(errors);
        }

        self.busy = true;
        SubmitDecision::Sent(submitter.submit(draft))
    }

    pub fn settle(&mut self, result: anyhow::Result<SubmitContactResp>) -> SubmitSettled {
        self.busy = false;

        match result {
            Ok(resp) => {
                debug!("contact form submitted: {}", resp.message);
                self.was_validated = false;
                let generation = self.banner.show(BannerKind::Success, SUCCESS_MESSAGE);

                SubmitSettled {
                    reset_form: true,
                    dismiss: Some(generation),
                }
            }
            Err(err) => {
                warn!("contact form submission error: {err}");
                self.banner.show(BannerKind::Error, FAILURE_MESSAGE);

                SubmitSettled {
                    reset_form: false,
                    dismiss: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use futures::executor::block_on;

    use super::*;

    struct CountingSubmitter {
        calls: usize,
        succeed: bool,
    }

    impl Submitter for CountingSubmitter {
        fn submit(&mut self, _draft: &ContactDraft) -> SubmitFuture {
            self.calls += 1;

            Box::pin(ready(match self.succeed {
                true => Ok(SubmitContactResp {
                    status: "success".to_owned(),
                    message: "ok".to_owned(),
                }),
                false => Err(anyhow::Error::msg("Network error occurred")),
            }))
        }
    }

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
            email: "grace@navy.mil".to_owned(),
            subject: "Compilers".to_owned(),
            message: "Let's talk.".to_owned(),
            budget: None,
            timeline: None,
        }
    }

    #[test]
    fn empty_required_field_never_submits() {
        let mut form = ContactForm::new(ContactConfig::default());
        let mut submitter = CountingSubmitter { calls: 0, succeed: true };
        let draft = ContactDraft {
            subject: String::new(),
            ..valid_draft()
        };

        match form.submit(&draft, true, &mut submitter) {
            SubmitDecision::Rejected(errors) => {
                assert_eq!(errors, vec![(Field::Subject, FieldError::Missing)]);
            }
            _ => panic!("expected rejection"),
        }

        assert_eq!(submitter.calls, 0);
        assert!(form.was_validated());
        assert!(!form.busy());
        assert_eq!(form.banner().current().unwrap().kind, BannerKind::Error);
    }

    #[test]
    fn busy_only_while_in_flight_and_reset_on_success() {
        let mut form = ContactForm::new(ContactConfig::default());
        let mut submitter = CountingSubmitter { calls: 0, succeed: true };

        let SubmitDecision::Sent(fut) = form.submit(&valid_draft(), true, &mut submitter) else {
            panic!("expected submission");
        };
        assert!(form.busy());

        let settled = form.settle(block_on(fut));

        assert!(!form.busy());
        assert!(settled.reset_form);
        assert!(!form.was_validated());
        assert_eq!(settled.dismiss, form.banner().current().map(|b| b.generation));
        assert_eq!(form.banner().current().unwrap().message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failure_keeps_form_contents() {
        let mut form = ContactForm::new(ContactConfig::default());
        let mut submitter = CountingSubmitter { calls: 0, succeed: false };

        let SubmitDecision::Sent(fut) = form.submit(&valid_draft(), true, &mut submitter) else {
            panic!("expected submission");
        };
        let settled = form.settle(block_on(fut));

        assert!(!settled.reset_form);
        assert_eq!(settled.dismiss, None);
        assert!(!form.busy());
        assert_eq!(form.banner().current().unwrap().message, FAILURE_MESSAGE);
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut form = ContactForm::new(ContactConfig::default());
        let mut submitter = CountingSubmitter { calls: 0, succeed: true };

        let first = form.submit(&valid_draft(), true, &mut submitter);
        assert!(matches!(first, SubmitDecision::Sent(_)));
        assert!(matches!(
            form.submit(&valid_draft(), true, &mut submitter),
            SubmitDecision::Busy
        ));
        assert_eq!(submitter.calls, 1);
    }

    #[test]
    fn resubmit_after_rejection_clears_validation_on_success() {
        let mut form = ContactForm::new(ContactConfig::default());
        let mut submitter = CountingSubmitter { calls: 0, succeed: true };

        let bad = ContactDraft {
            email: "nope".to_owned(),
            ..valid_draft()
        };
        assert!(matches!(
            form.submit(&bad, true, &mut submitter),
            SubmitDecision::Rejected(_)
        ));
        assert!(form.was_validated());

        let SubmitDecision::Sent(fut) = form.submit(&valid_draft(), true, &mut submitter) else {
            panic!("expected submission");
        };
        form.settle(block_on(fut));
        assert!(!form.was_validated());
    }

    #[test]
    fn counter_warns_strictly_past_ninety_percent() {
        let counter = ContactForm::new(ContactConfig::default()).counter();

        let at_900 = counter.status(&"a".repeat(900));
        let at_901 = counter.status(&"a".repeat(901));

        assert!(!at_900.warning);
        assert!(at_901.warning);
        assert_eq!(at_901.text, "901 / 1000 characters");
    }

    #[test]
    fn counter_counts_chars_and_clamps() {
        let counter = CharacterCounter::new(3, 0.9);

        assert_eq!(counter.status("héé").text, "3 / 3 characters");
        assert_eq!(counter.clamp("héllo"), "hél");
    }

    #[test]
    fn field_rules() {
        assert_eq!(validate_field(Field::Budget, "", 10), Ok(()));
        assert_eq!(validate_field(Field::FirstName, "", 10), Err(FieldError::Missing));
        assert_eq!(validate_field(Field::Email, "  ", 10), Err(FieldError::Missing));
        assert_eq!(
            validate_field(Field::Email, "nope", 10),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(validate_field(Field::Email, "a@b.co", 10), Ok(()));
        assert_eq!(
            validate_field(Field::Message, "elevenchars", 10),
            Err(FieldError::TooLong { max: 10 })
        );
    }

    #[test]
    fn email_follows_browser_grammar() {
        for bad in ["a@b..c", "a@.b.c", "a@b.c.", "a@-b.c", "a b@c.d", "@b.c", "a@"] {
            assert_eq!(
                validate_field(Field::Email, bad, 10),
                Err(FieldError::InvalidEmail),
                "{bad}"
            );
        }

        for good in ["a@localhost", "first.last+tag@mail.example.org", " a@b.co "] {
            assert_eq!(validate_field(Field::Email, good, 10), Ok(()), "{good}");
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(validate_field(Field::Subject, "   ", 10), Ok(()));
        assert_eq!(validate_field(Field::Message, " \n ", 10), Ok(()));
    }

    #[test]
    fn browser_rejection_blocks_valid_draft() {
        let mut form = ContactForm::new(ContactConfig::default());
        let mut submitter = CountingSubmitter { calls: 0, succeed: true };

        match form.submit(&valid_draft(), false, &mut submitter) {
            SubmitDecision::Rejected(errors) => assert!(errors.is_empty()),
            _ => panic!("expected rejection"),
        }
        assert_eq!(submitter.calls, 0);
        assert!(form.was_validated());
        assert_eq!(form.banner().current().unwrap().message, INVALID_FORM_MESSAGE);

        let SubmitDecision::Sent(fut) = form.submit(&valid_draft(), true, &mut submitter) else {
            panic!("expected submission");
        };
        assert!(matches!(
            form.submit(&valid_draft(), false, &mut submitter),
            SubmitDecision::Busy
        ));

        form.settle(block_on(fut));
        assert_eq!(submitter.calls, 1);
    }

    #[test]
    fn set_round_trips_through_value() {
        let mut draft = ContactDraft::default();

        Field::Email.set(&mut draft, "a@b.co".to_owned());
        Field::Budget.set(&mut draft, "10k".to_owned());
        Field::Timeline.set(&mut draft, String::new());

        assert_eq!(Field::Email.value(&draft), "a@b.co");
        assert_eq!(draft.budget.as_deref(), Some("10k"));
        assert_eq!(draft.timeline, None);
    }

    #[test]
    fn blur_marks() {
        assert_eq!(FieldMark::on_blur(Field::Email, "x", 10), FieldMark::Invalid);
        assert_eq!(FieldMark::on_blur(Field::Email, "x@y.z", 10).class(), "is-valid");
        assert_eq!(FieldMark::default().class(), "");
    }
}
