use std::{future::Future, pin::Pin};

use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

// structs and types

pub const NOT_SPECIFIED: &str = "Not specified";

// the values collected from the contact form at submit time
//
// this only lives for a single submission attempt, and the field names follow the
// form's input names so that the netlify payload matches a plain form post
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl ContactDraft {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    // named field values, in form order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ];

        if let Some(budget) = &self.budget {
            fields.push(("budget", budget.as_str()));
        }
        if let Some(timeline) = &self.timeline {
            fields.push(("timeline", timeline.as_str()));
        }

        fields
    }

    fn budget_or_default(&self) -> &str {
        self.budget.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    fn timeline_or_default(&self) -> &str {
        self.timeline.as_deref().unwrap_or(NOT_SPECIFIED)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SubmitContactResp {
    pub status: String,
    pub message: String,
}

// third-party form backends
//
// none of these are wired to the network; they describe the payload each service
// expects so that swapping the simulation for a real transport is a matter of
// posting format_for_service() somewhere
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum ContactService {
    EmailJs,
    Netlify,
    Formspree,
}

pub fn format_for_service(draft: &ContactDraft, service: ContactService) -> Value {
    match service {
        ContactService::EmailJs => json!({
            "from_name": draft.full_name(),
            "from_email": draft.email,
            "subject": draft.subject,
            "message": draft.message,
            "budget": draft.budget_or_default(),
            "timeline": draft.timeline_or_default(),
        }),
        ContactService::Netlify => {
            let map = draft
                .fields()
                .into_iter()
                .map(|(k, v)| (k.to_owned(), Value::String(v.to_owned())))
                .collect();
            Value::Object(map)
        }
        ContactService::Formspree => json!({
            "name": draft.full_name(),
            "email": draft.email,
            "subject": draft.subject,
            "message": format!(
                "{}\n\nBudget: {}\nTimeline: {}",
                draft.message,
                draft.budget_or_default(),
                draft.timeline_or_default()
            ),
        }),
    }
}

// messages

// the returned future owns everything it needs, so callers can release whatever
// borrow they hold on the submitter before awaiting it
pub type SubmitFuture = Pin<Box<dyn Future<Output = anyhow::Result<SubmitContactResp>>>>;

// anything that can deliver a contact draft
pub trait Submitter {
    fn submit(&mut self, draft: &ContactDraft) -> SubmitFuture;
}

// stand-in for a real form backend
//
// resolves after a fixed delay, succeeding with probability success_rate
pub struct SimulatedSubmitter<R: Rng> {
    delay_ms: u32,
    success_rate: f64,
    rng: R,
}

impl<R: Rng> SimulatedSubmitter<R> {
    pub fn new(delay_ms: u32, success_rate: f64, rng: R) -> Self {
        SimulatedSubmitter {
            delay_ms,
            success_rate: success_rate.clamp(0.0, 1.0),
            rng,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    // decide the outcome of the next submission
    pub fn roll(&mut self) -> bool {
        self.rng.random::<f64>() < self.success_rate
    }
}

impl<R: Rng> Submitter for SimulatedSubmitter<R> {
    fn submit(&mut self, draft: &ContactDraft) -> SubmitFuture {
        debug!("contact form submission data:");
        for (key, value) in draft.fields() {
            debug!("{key}: {value}");
        }

        let success = self.roll();
        let delay_ms = self.delay_ms;

        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;

            if success {
                Ok(SubmitContactResp {
                    status: "success".to_owned(),
                    message: "Message sent successfully!".to_owned(),
                })
            } else {
                Err(anyhow::Error::msg("Network error occurred"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Engine".to_owned(),
            message: "Hello there".to_owned(),
            budget: Some("5k".to_owned()),
            timeline: None,
        }
    }

    #[test]
    fn emailjs_payload_fills_defaults() {
        let payload = format_for_service(&draft(), ContactService::EmailJs);

        assert_eq!(payload["from_name"], "Ada Lovelace");
        assert_eq!(payload["from_email"], "ada@example.com");
        assert_eq!(payload["budget"], "5k");
        assert_eq!(payload["timeline"], NOT_SPECIFIED);
    }

    #[test]
    fn netlify_payload_uses_form_names() {
        let payload = format_for_service(&draft(), ContactService::Netlify);
        let obj = payload.as_object().unwrap();

        assert_eq!(obj["firstName"], "Ada");
        assert_eq!(obj["budget"], "5k");
        assert!(!obj.contains_key("timeline"));
    }

    #[test]
    fn formspree_payload_folds_extras_into_message() {
        let payload = format_for_service(&draft(), ContactService::Formspree);

        assert_eq!(payload["name"], "Ada Lovelace");
        assert_eq!(
            payload["message"],
            "Hello there\n\nBudget: 5k\nTimeline: Not specified"
        );
    }

    #[test]
    fn draft_serializes_camel_case() {
        let value = serde_json::to_value(draft()).unwrap();

        assert_eq!(value["firstName"], "Ada");
        assert!(value.get("timeline").is_none());
    }

    #[test]
    fn roll_respects_extremes() {
        let mut always = SimulatedSubmitter::new(0, 1.0, StdRng::seed_from_u64(7));
        let mut never = SimulatedSubmitter::new(0, 0.0, StdRng::seed_from_u64(7));

        for _ in 0..100 {
            assert!(always.roll());
            assert!(!never.roll());
        }
    }

    #[test]
    fn roll_is_mostly_successful() {
        let mut submitter = SimulatedSubmitter::new(2000, 0.9, StdRng::seed_from_u64(42));

        let successes = (0..10_000).filter(|_| submitter.roll()).count();

        assert!((8_500..9_500).contains(&successes), "{successes}");
    }

    #[test]
    fn success_rate_is_clamped() {
        let mut submitter = SimulatedSubmitter::new(0, 3.0, StdRng::seed_from_u64(1));

        assert!(submitter.roll());
        assert_eq!(submitter.delay_ms(), 0);
    }
}
