use std::fmt;

use log::{debug, info};

use crate::api::leads::{Lead, LeadError};

/// Call-to-action controls that open the lead modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTrigger {
    Navbar,
    Hero,
    Pricing,
    FinalCta,
    StickyCta,
}

impl fmt::Display for ModalTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalTrigger::Navbar => "navbar",
            ModalTrigger::Hero => "hero",
            ModalTrigger::Pricing => "pricing",
            ModalTrigger::FinalCta => "final-cta",
            ModalTrigger::StickyCta => "sticky-cta",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Dismissed,
    Submitted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }

    /// Every trigger converges on the same transition; opening twice is a no-op.
    pub fn open(self, trigger: ModalTrigger) -> Self {
        if self.is_open() {
            debug!("Lead modal already open, ignoring {} trigger", trigger);
        } else {
            info!("Lead modal opened from {}", trigger);
        }
        ModalState::Open
    }

    pub fn close(self, reason: CloseReason) -> Self {
        if self.is_open() {
            info!("Lead modal closed ({:?})", reason);
        }
        ModalState::Closed
    }
}

/// Local status of the form inside the modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Failed(LeadError),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn error(&self) -> Option<&LeadError> {
        match self {
            SubmissionStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// What a finished request did to the form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// The lead was handed off; the modal should acknowledge and close.
    Accepted,
    /// The lead was not handed off; the form now shows the error.
    Failed,
    /// The reply belongs to a request the form has since abandoned.
    Stale,
}

/// Submission state machine of the lead form.
///
/// Every request carries the generation it was started in. Dismissing or
/// reopening the modal bumps the generation, so replies from abandoned
/// requests are dropped instead of leaking into the next form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    status: SubmissionStatus,
    generation: u64,
}

impl LeadForm {
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Starts a submission from the values read out of the form. Returns the
    /// request to send, or `None` when nothing should be sent.
    pub fn submit(&mut self, lead: Result<Lead, LeadError>) -> Option<(u64, Lead)> {
        if self.status.is_submitting() {
            debug!("Submission already in flight, ignoring submit");
            return None;
        }
        match lead {
            Ok(lead) => {
                self.generation += 1;
                self.status = SubmissionStatus::Submitting;
                Some((self.generation, lead))
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e);
                None
            }
        }
    }

    pub fn finish(&mut self, generation: u64, result: Result<(), LeadError>) -> SubmissionOutcome {
        if generation != self.generation || !self.status.is_submitting() {
            debug!("Dropping reply for abandoned submission {}", generation);
            return SubmissionOutcome::Stale;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Idle;
                SubmissionOutcome::Accepted
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e);
                SubmissionOutcome::Failed
            }
        }
    }

    /// Clears the form and abandons any request still in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::leads::LeadField;

    const TRIGGERS: [ModalTrigger; 5] = [
        ModalTrigger::Navbar,
        ModalTrigger::Hero,
        ModalTrigger::Pricing,
        ModalTrigger::FinalCta,
        ModalTrigger::StickyCta,
    ];

    fn lead() -> Lead {
        Lead::from_form("Pizzaria do João", "João", "(11) 99999-9999").unwrap()
    }

    #[test]
    fn starts_closed() {
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn every_trigger_opens() {
        for trigger in TRIGGERS {
            assert!(ModalState::Closed.open(trigger).is_open(), "{trigger}");
        }
    }

    #[test]
    fn opening_when_open_stays_open() {
        let state = ModalState::Closed.open(ModalTrigger::Hero).open(ModalTrigger::Navbar);
        assert!(state.is_open());
    }

    #[test]
    fn dismiss_and_submit_both_close() {
        let open = ModalState::Closed.open(ModalTrigger::Navbar);
        assert!(!open.close(CloseReason::Dismissed).is_open());
        assert!(!open.close(CloseReason::Submitted).is_open());
    }

    #[test]
    fn trigger_names_for_logs() {
        assert_eq!(ModalTrigger::FinalCta.to_string(), "final-cta");
        assert_eq!(ModalTrigger::StickyCta.to_string(), "sticky-cta");
    }

    #[test]
    fn invalid_lead_fails_without_sending() {
        let mut form = LeadForm::default();
        let sent = form.submit(Err(LeadError::MissingField(LeadField::PhoneNumber)));
        assert!(sent.is_none());
        assert_eq!(
            form.status().error(),
            Some(&LeadError::MissingField(LeadField::PhoneNumber))
        );
    }

    #[test]
    fn accepted_submission_returns_to_idle() {
        let mut form = LeadForm::default();
        let (generation, sent) = form.submit(Ok(lead())).unwrap();
        assert_eq!(sent, lead());
        assert!(form.status().is_submitting());

        assert_eq!(form.finish(generation, Ok(())), SubmissionOutcome::Accepted);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn failed_submission_keeps_error_for_retry() {
        let mut form = LeadForm::default();
        let (generation, _) = form.submit(Ok(lead())).unwrap();

        let outcome = form.finish(generation, Err(LeadError::Rejected(500)));
        assert_eq!(outcome, SubmissionOutcome::Failed);
        assert_eq!(form.status().error(), Some(&LeadError::Rejected(500)));

        // Retrying from the failed state is allowed
        assert!(form.submit(Ok(lead())).is_some());
    }

    #[test]
    fn second_submit_is_blocked_while_in_flight() {
        let mut form = LeadForm::default();
        assert!(form.submit(Ok(lead())).is_some());
        assert!(form.submit(Ok(lead())).is_none());
        assert!(form.status().is_submitting());
    }

    #[test]
    fn reply_after_dismiss_does_not_reach_reopened_form() {
        let mut form = LeadForm::default();
        let (generation, _) = form.submit(Ok(lead())).unwrap();

        form.reset(); // dismissed
        form.reset(); // reopened
        let outcome = form.finish(generation, Err(LeadError::Network("offline".into())));

        assert_eq!(outcome, SubmissionOutcome::Stale);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn old_reply_does_not_settle_newer_submission() {
        let mut form = LeadForm::default();
        let (first, _) = form.submit(Ok(lead())).unwrap();
        form.reset();
        let (second, _) = form.submit(Ok(lead())).unwrap();

        assert_eq!(form.finish(first, Ok(())), SubmissionOutcome::Stale);
        assert!(form.status().is_submitting());
        assert_eq!(form.finish(first, Err(LeadError::Rejected(502))), SubmissionOutcome::Stale);
        assert!(form.status().is_submitting());

        assert_eq!(form.finish(second, Ok(())), SubmissionOutcome::Accepted);
    }

    #[test]
    fn duplicate_reply_is_ignored() {
        let mut form = LeadForm::default();
        let (generation, _) = form.submit(Ok(lead())).unwrap();
        form.finish(generation, Err(LeadError::Rejected(503)));
        assert_eq!(form.finish(generation, Ok(())), SubmissionOutcome::Stale);
        assert_eq!(form.status().error(), Some(&LeadError::Rejected(503)));
    }
}
