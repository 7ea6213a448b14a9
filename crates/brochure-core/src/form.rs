//! Contact form acknowledgment
//!
//! Submission never transmits anything. It swaps the submit control's
//! label for a confirmation, clears every field, and reverts after a
//! fixed delay. Re-submitting while the confirmation is up restarts the
//! timer but keeps the label captured when the form was last idle, so
//! the confirmation text can never become the "original".

use std::time::{Duration, Instant};

use crate::constants::ACK_DURATION;
use crate::page::FormDef;

/// One text field with its default value (empty)
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
}

/// Submit-control state machine: Idle -> Confirming -> (delay) -> Idle
#[derive(Debug, Clone)]
pub enum AckState {
    Idle,
    Confirming {
        since: Instant,
        original_label: String,
    },
}

/// The contact form and its acknowledgment behavior
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Id of the section the form renders inside
    pub section_id: String,
    fields: Vec<FormField>,
    submit_label: String,
    confirm_label: String,
    ack_duration: Duration,
    ack: AckState,
}

impl ContactForm {
    pub fn from_def(def: &FormDef) -> Self {
        Self {
            section_id: def.section.clone(),
            fields: def
                .fields
                .iter()
                .map(|label| FormField {
                    label: label.clone(),
                    value: String::new(),
                })
                .collect(),
            submit_label: def.submit_label.clone(),
            confirm_label: def.confirm_label.clone(),
            ack_duration: ACK_DURATION,
            ack: AckState::Idle,
        }
    }

    /// Override the restore delay (tests, mostly)
    pub fn with_ack_duration(mut self, duration: Duration) -> Self {
        self.ack_duration = duration;
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Mutable access to a field's text, for editing
    pub fn field_value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index).map(|field| &mut field.value)
    }

    /// The label the submit control should show right now
    pub fn submit_label(&self) -> &str {
        match &self.ack {
            AckState::Idle => &self.submit_label,
            AckState::Confirming { .. } => &self.confirm_label,
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.ack, AckState::Confirming { .. })
    }

    /// Handle a submission
    ///
    /// Clears every field in the same tick and enters (or re-enters)
    /// the confirming state. The original label is captured only on the
    /// Idle -> Confirming edge.
    pub fn submit(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.value.clear();
        }

        self.ack = match std::mem::replace(&mut self.ack, AckState::Idle) {
            AckState::Idle => {
                tracing::info!("Form submitted, showing acknowledgment");
                AckState::Confirming {
                    since: now,
                    original_label: self.submit_label.clone(),
                }
            }
            // Restart the timer, keep the true original
            AckState::Confirming { original_label, .. } => AckState::Confirming {
                since: now,
                original_label,
            },
        };
    }

    /// Expire the acknowledgment when its delay has elapsed
    ///
    /// Returns true when the control just reverted (the caller should
    /// redraw).
    pub fn tick(&mut self, now: Instant) -> bool {
        if let AckState::Confirming {
            since,
            original_label,
        } = &self.ack
        {
            if now.duration_since(*since) >= self.ack_duration {
                self.submit_label = original_label.clone();
                self.ack = AckState::Idle;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::from_def(&FormDef {
            section: "contact".into(),
            fields: vec!["Name".into(), "Email".into(), "Message".into()],
            submit_label: "Send Message".into(),
            confirm_label: "Message Sent! ✓".into(),
        })
    }

    #[test]
    fn test_submit_confirms_and_clears_fields() {
        let mut form = form();
        let now = Instant::now();
        *form.field_value_mut(0).unwrap() = "Ada".into();
        *form.field_value_mut(1).unwrap() = "ada@example.com".into();

        form.submit(now);

        assert_eq!(form.submit_label(), "Message Sent! ✓");
        assert!(form.is_confirming());
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_restores_after_delay() {
        let mut form = form();
        let now = Instant::now();
        form.submit(now);

        // Not yet
        assert!(!form.tick(now + Duration::from_millis(2999)));
        assert!(form.is_confirming());

        assert!(form.tick(now + Duration::from_millis(3000)));
        assert!(!form.is_confirming());
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn test_resubmit_restarts_timer_keeps_original() {
        let mut form = form();
        let start = Instant::now();
        form.submit(start);

        // Second submission 2s in restarts the 3s window
        let resubmit = start + Duration::from_secs(2);
        form.submit(resubmit);

        assert!(!form.tick(start + Duration::from_millis(3500)));
        assert!(form.tick(resubmit + Duration::from_secs(3)));
        // The original label survives the double submission
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn test_tick_when_idle_is_a_no_op() {
        let mut form = form();
        assert!(!form.tick(Instant::now()));
        assert_eq!(form.submit_label(), "Send Message");
    }
}
