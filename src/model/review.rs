//! Customer reviews and the partner team's reply thread.
//!
//! # Actor Framework
//! [`Review`] implements [`ActorEntity`](crate::framework::ActorEntity) (see
//! [`review_actor`](crate::review_actor)), so it is managed by a
//! [`ResourceActor`](crate::framework::ResourceActor).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Author recorded on every reply and note written from the dashboard.
pub const PARTNER_TEAM: &str = "Partner Team";

/// Type-safe identifier for Reviews (e.g. `rev-101`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub String);

impl From<&str> for ReviewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewStatus {
    New,
    Responded,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    Delay,
    Packaging,
    #[serde(rename = "Missing items")]
    MissingItems,
    Taste,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewChannel {
    App,
    WhatsApp,
    Website,
    #[serde(rename = "In-person")]
    InPerson,
}

/// A reply visible to the customer, or an internal note. Same shape for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

impl Comment {
    /// A new comment by the partner team, stamped now.
    pub fn by_partner(prefix: &str, text: impl Into<String>) -> Self {
        Self {
            id: format!("{}-{}", prefix, uuid::Uuid::new_v4()),
            text: text.into(),
            timestamp: Utc::now(),
            author: PARTNER_TEAM.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub customer: String,
    /// 1 to 5.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub channel: ReviewChannel,
    pub status: ReviewStatus,
    pub issue_types: Vec<IssueType>,
    pub order_id: Option<String>,
    pub replies: Vec<Comment>,
    pub notes: Vec<Comment>,
}

/// Payload for recording a new review.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub customer: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub channel: ReviewChannel,
    pub issue_types: Vec<IssueType>,
    pub order_id: Option<String>,
}

/// Explicit status change from the review detail panel.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub status: Option<ReviewStatus>,
}

/// Narrowing criteria for the review list. Unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    /// Case-insensitive substring over customer, title and comment.
    pub search: Option<String>,
    pub rating: Option<u8>,
    pub status: Option<ReviewStatus>,
    pub issue_type: Option<IssueType>,
    pub channel: Option<ReviewChannel>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let query = search.to_lowercase();
            let hit = [&review.customer, &review.title, &review.comment]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        if self.rating.is_some_and(|rating| review.rating != rating) {
            return false;
        }
        if self.status.is_some_and(|status| review.status != status) {
            return false;
        }
        if self
            .issue_type
            .is_some_and(|issue| !review.issue_types.contains(&issue))
        {
            return false;
        }
        if self.channel.is_some_and(|channel| review.channel != channel) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(customer: &str, rating: u8, status: ReviewStatus) -> Review {
        Review {
            id: ReviewId::from("rev-1"),
            customer: customer.into(),
            rating,
            title: "Cold food".into(),
            comment: "Packaging was not proper".into(),
            date: "2025-12-10".into(),
            channel: ReviewChannel::App,
            status,
            issue_types: vec![IssueType::Packaging],
            order_id: None,
            replies: vec![],
            notes: vec![],
        }
    }

    #[test]
    fn test_filter_combines_criteria() {
        let r = review("Anjali S.", 2, ReviewStatus::New);

        assert!(ReviewFilter::default().matches(&r));
        assert!(ReviewFilter { search: Some("PACKAGING".into()), ..Default::default() }.matches(&r));
        assert!(!ReviewFilter { search: Some("delay".into()), ..Default::default() }.matches(&r));
        assert!(!ReviewFilter { rating: Some(5), ..Default::default() }.matches(&r));
        assert!(ReviewFilter {
            status: Some(ReviewStatus::New),
            issue_type: Some(IssueType::Packaging),
            channel: Some(ReviewChannel::App),
            ..Default::default()
        }
        .matches(&r));
        assert!(!ReviewFilter { issue_type: Some(IssueType::Delay), ..Default::default() }.matches(&r));
    }

    #[test]
    fn test_wire_names_follow_seed_shape() {
        assert_eq!(serde_json::to_string(&ReviewStatus::Responded).unwrap(), "\"RESPONDED\"");
        assert_eq!(serde_json::to_string(&IssueType::MissingItems).unwrap(), "\"Missing items\"");
        assert_eq!(serde_json::to_string(&ReviewChannel::InPerson).unwrap(), "\"In-person\"");
    }
}
