//! Submission Flow
//!
//! `Idle -> Validating -> Submitting -> Succeeded`, or
//! `Submitting -> Failed -> Idle`. The session owns the ratings for the
//! lifetime of the form; a failed write leaves them untouched so the user
//! can submit again.

use async_trait::async_trait;

use crate::error::{FeedbackError, StoreError};

use super::contact::ContactForm;
use super::rating::{RatingDimension, RatingSet};
use super::record::{ClientContext, FeedbackRecord};

pub const RESTART_PROMPT: &str = "Would you like to submit another feedback?";
const WRITE_FAILED_MESSAGE: &str = "There was an error submitting your feedback. Please try again.";

/// Append-only sink for feedback records.
#[async_trait(?Send)]
pub trait FeedbackWriter {
    async fn append(&self, record: &FeedbackRecord) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "alert alert-info",
            NoticeKind::Warning => "alert alert-warning",
            NoticeKind::Error => "alert alert-error",
        }
    }
}

/// A transient, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// User-facing notice for a submission error.
pub fn notice_for(err: &FeedbackError) -> Notice {
    match err {
        FeedbackError::NoRatings => Notice::new(NoticeKind::Warning, err.to_string()),
        FeedbackError::InvalidPhone(_) => Notice::new(NoticeKind::Error, err.to_string()),
        FeedbackError::Busy => Notice::new(NoticeKind::Info, err.to_string()),
        FeedbackError::Store(_) => Notice::new(NoticeKind::Error, WRITE_FAILED_MESSAGE),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackSession {
    ratings: RatingSet,
    state: FlowState,
}

impl FeedbackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ratings(&self) -> &RatingSet {
        &self.ratings
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The submit control is enabled only while nothing is in flight.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, FlowState::Idle | FlowState::Failed)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, FlowState::Validating | FlowState::Submitting)
    }

    pub fn rate(&mut self, dimension: RatingDimension, score: u8) {
        self.ratings.set(dimension, score);
    }

    /// Validate and move to `Submitting`, returning the record to write.
    ///
    /// Missing ratings keep the flow idle. A malformed phone number is
    /// caught after entering `Submitting` and ends in `Failed`.
    pub fn begin_submit(
        &mut self,
        contact: &ContactForm,
        client: &ClientContext,
    ) -> Result<FeedbackRecord, FeedbackError> {
        if !self.can_submit() {
            return Err(FeedbackError::Busy);
        }
        self.state = FlowState::Validating;

        if self.ratings.is_unrated() {
            tracing::info!("Feedback blocked: no ratings given");
            self.state = FlowState::Idle;
            return Err(FeedbackError::NoRatings);
        }

        self.state = FlowState::Submitting;
        match contact.resolve() {
            Ok(customer) => Ok(FeedbackRecord::assemble(&self.ratings, customer, client)),
            Err(err) => {
                tracing::warn!(error = %err, "Feedback blocked: invalid phone");
                self.state = FlowState::Failed;
                Err(err)
            }
        }
    }

    /// Record the outcome of the store write. Returns the notice to show on failure.
    pub fn finish(&mut self, outcome: Result<(), StoreError>) -> Option<Notice> {
        if self.state != FlowState::Submitting {
            tracing::warn!(state = ?self.state, "Write outcome arrived outside of submission");
            return None;
        }
        match outcome {
            Ok(()) => {
                tracing::info!("Feedback stored");
                self.state = FlowState::Succeeded;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "Feedback write failed");
                self.state = FlowState::Failed;
                Some(notice_for(&FeedbackError::Store(err)))
            }
        }
    }

    /// Leave `Failed` once the notice is up; the form is usable again.
    pub fn recover(&mut self) {
        if self.state == FlowState::Failed {
            self.state = FlowState::Idle;
        }
    }

    /// Start over with an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use std::cell::RefCell;

    /// Records appended documents; optionally fails every write.
    #[derive(Default)]
    struct MemoryWriter {
        fail: bool,
        written: RefCell<Vec<FeedbackRecord>>,
    }

    #[async_trait(?Send)]
    impl FeedbackWriter for MemoryWriter {
        async fn append(&self, record: &FeedbackRecord) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Write {
                    path: "restaurant_feedback".into(),
                    message: "permission denied".into(),
                });
            }
            self.written.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    fn client() -> ClientContext {
        ClientContext {
            now: FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap(),
            user_agent: "ua".into(),
        }
    }

    async fn submit(
        session: &mut FeedbackSession,
        writer: &MemoryWriter,
        contact: &ContactForm,
    ) -> Result<Option<Notice>, FeedbackError> {
        let record = session.begin_submit(contact, &client())?;
        let outcome = writer.append(&record).await;
        Ok(session.finish(outcome))
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let writer = MemoryWriter::default();
        let mut session = FeedbackSession::new();
        session.rate(RatingDimension::MenuEase, 5);
        session.rate(RatingDimension::MenuClarity, 4);
        session.rate(RatingDimension::Ambience, 2);

        let notice = submit(&mut session, &writer, &ContactForm::default()).await.unwrap();
        assert!(notice.is_none());
        assert_eq!(session.state(), FlowState::Succeeded);

        let written = writer.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].overall_scores.menu_average, 4.5);
        assert_eq!(written[0].overall_scores.restaurant_average, 2.0);
    }

    #[tokio::test]
    async fn test_unrated_blocked_before_write() {
        let writer = MemoryWriter::default();
        let mut session = FeedbackSession::new();

        let err = submit(&mut session, &writer, &ContactForm::default()).await.unwrap_err();
        assert_eq!(err, FeedbackError::NoRatings);
        assert_eq!(notice_for(&err).kind, NoticeKind::Warning);
        assert_eq!(session.state(), FlowState::Idle);
        assert!(writer.written.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_phone_fails_then_recovers() {
        let writer = MemoryWriter::default();
        let mut session = FeedbackSession::new();
        session.rate(RatingDimension::Service, 3);

        let err = submit(&mut session, &writer, &ContactForm::new("", "1234567890")).await.unwrap_err();
        assert!(matches!(err, FeedbackError::InvalidPhone(_)));
        assert_eq!(session.state(), FlowState::Failed);
        assert!(writer.written.borrow().is_empty());

        session.recover();
        assert!(session.can_submit());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_ratings_and_allows_resubmit() {
        let failing = MemoryWriter { fail: true, ..Default::default() };
        let mut session = FeedbackSession::new();
        session.rate(RatingDimension::FoodQuality, 4);
        let before = *session.ratings();

        let notice = submit(&mut session, &failing, &ContactForm::default()).await.unwrap();
        let notice = notice.expect("failure notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(session.state(), FlowState::Failed);
        assert_eq!(session.ratings(), &before);

        session.recover();
        assert_eq!(session.state(), FlowState::Idle);

        let writer = MemoryWriter::default();
        submit(&mut session, &writer, &ContactForm::default()).await.unwrap();
        assert_eq!(session.state(), FlowState::Succeeded);
        assert_eq!(writer.written.borrow().len(), 1);
    }

    #[test]
    fn test_no_second_submission_while_in_flight() {
        let mut session = FeedbackSession::new();
        session.rate(RatingDimension::Pricing, 1);
        session.begin_submit(&ContactForm::default(), &client()).unwrap();
        assert!(session.is_busy());
        assert_eq!(
            session.begin_submit(&ContactForm::default(), &client()).unwrap_err(),
            FeedbackError::Busy
        );
    }

    #[test]
    fn test_late_outcome_ignored_and_reset() {
        let mut session = FeedbackSession::new();
        assert_eq!(session.finish(Ok(())), None);
        assert_eq!(session.state(), FlowState::Idle);

        session.rate(RatingDimension::Pricing, 5);
        session.begin_submit(&ContactForm::default(), &client()).unwrap();
        session.finish(Ok(()));
        session.reset();
        assert_eq!(session, FeedbackSession::default());
    }
}
