//! Feedback Layer
//!
//! Star ratings, contact details and the one-shot submission flow that
//! turns them into a stored feedback record.

mod contact;
mod flow;
mod rating;
mod record;

pub use contact::{is_valid_phone, ContactForm, CustomerInfo, ANONYMOUS, PHONE_NOT_PROVIDED};
pub use flow::{notice_for, FeedbackSession, FeedbackWriter, FlowState, Notice, NoticeKind, RESTART_PROMPT};
pub use rating::{Cluster, RatingDimension, RatingSet, StarRow, MAX_STARS};
pub use record::{cluster_average, ClientContext, DeviceInfo, FeedbackRecord, MenuExperience, OverallScores, RatingGroups, RestaurantExperience};
