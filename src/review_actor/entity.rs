//! [`ActorEntity`] implementation for [`Review`].
//!
//! Status rules:
//! - replying to a `NEW` review makes it `RESPONDED`; other statuses are kept
//! - resolving always makes it `RESOLVED`
//! - notes never change the status

use super::actions::ReviewAction;
use super::error::ReviewError;
use crate::framework::ActorEntity;
use crate::model::{Comment, Review, ReviewCreate, ReviewId, ReviewStatus, ReviewUpdate};
use async_trait::async_trait;

fn non_blank(text: &str, what: &'static str) -> Result<String, ReviewError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ReviewError::EmptyText(what))
    } else {
        Ok(text.to_string())
    }
}

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = ReviewUpdate;
    type Action = ReviewAction;
    type ActionResult = Review;
    type Context = ();
    type Error = ReviewError;

    fn id(&self) -> &ReviewId {
        &self.id
    }

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, ReviewError> {
        if !(1..=5).contains(&params.rating) {
            return Err(ReviewError::InvalidRating(params.rating));
        }
        Ok(Self {
            id,
            customer: params.customer,
            rating: params.rating,
            title: params.title,
            comment: params.comment,
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            channel: params.channel,
            status: ReviewStatus::New,
            issue_types: params.issue_types,
            order_id: params.order_id,
            replies: Vec::new(),
            notes: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: ReviewUpdate, _ctx: &()) -> Result<(), ReviewError> {
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    /// Returns the review as it stands after the action.
    async fn handle_action(&mut self, action: ReviewAction, _ctx: &()) -> Result<Review, ReviewError> {
        match action {
            ReviewAction::Reply(text) => {
                let text = non_blank(&text, "reply")?;
                self.replies.push(Comment::by_partner("reply", text));
                if self.status == ReviewStatus::New {
                    self.status = ReviewStatus::Responded;
                }
            }
            ReviewAction::AddNote(text) => {
                let text = non_blank(&text, "note")?;
                self.notes.push(Comment::by_partner("note", text));
            }
            ReviewAction::Resolve { note } => {
                self.status = ReviewStatus::Resolved;
                if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
                    self.notes.push(Comment::by_partner("note", note));
                }
            }
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IssueType, ReviewChannel};

    fn create(rating: u8) -> ReviewCreate {
        ReviewCreate {
            customer: "Surya".into(),
            rating,
            title: "Delayed order".into(),
            comment: "Order always gets delayed".into(),
            channel: ReviewChannel::App,
            issue_types: vec![IssueType::Delay],
            order_id: Some("7530992339".into()),
        }
    }

    #[test]
    fn test_create_validates_rating() {
        let review = Review::from_create_params(ReviewId::from("rev-1"), create(1)).unwrap();
        assert_eq!(review.status, ReviewStatus::New);
        assert!(review.replies.is_empty());

        let err = Review::from_create_params(ReviewId::from("rev-2"), create(0)).unwrap_err();
        assert_eq!(err, ReviewError::InvalidRating(0));
    }

    #[tokio::test]
    async fn test_reply_moves_new_to_responded_only() {
        let mut review = Review::from_create_params(ReviewId::from("rev-1"), create(1)).unwrap();

        let after = review
            .handle_action(ReviewAction::Reply("Sorry about that!".into()), &())
            .await
            .unwrap();
        assert_eq!(after.status, ReviewStatus::Responded);
        assert_eq!(after.replies.len(), 1);
        assert_eq!(after.replies[0].author, "Partner Team");

        review.status = ReviewStatus::Resolved;
        let after = review
            .handle_action(ReviewAction::Reply("Following up".into()), &())
            .await
            .unwrap();
        assert_eq!(after.status, ReviewStatus::Resolved);
        assert_eq!(after.replies.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let mut review = Review::from_create_params(ReviewId::from("rev-1"), create(1)).unwrap();

        let err = review
            .handle_action(ReviewAction::Reply("   ".into()), &())
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::EmptyText("reply"));
        assert_eq!(review.status, ReviewStatus::New);

        let err = review.handle_action(ReviewAction::AddNote(String::new()), &()).await.unwrap_err();
        assert_eq!(err, ReviewError::EmptyText("note"));
    }

    #[tokio::test]
    async fn test_resolve_appends_only_non_blank_note() {
        let mut review = Review::from_create_params(ReviewId::from("rev-1"), create(2)).unwrap();

        let after = review
            .handle_action(ReviewAction::Resolve { note: Some("  ".into()) }, &())
            .await
            .unwrap();
        assert_eq!(after.status, ReviewStatus::Resolved);
        assert!(after.notes.is_empty());

        let after = review
            .handle_action(ReviewAction::Resolve { note: Some("Refund issued".into()) }, &())
            .await
            .unwrap();
        assert_eq!(after.notes.len(), 1);
        assert_eq!(after.notes[0].text, "Refund issued");
    }
}
