//! Custom actions for the review desk.
//!
//! These are the operations behind the reply, note and resolve dialogs. They are handled
//! by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action) on
//! [`Review`](crate::model::Review).

/// Custom actions for Review entities.
#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Appends a customer-visible reply. A `NEW` review becomes `RESPONDED`.
    Reply(String),
    /// Appends an internal note. Status is unchanged.
    AddNote(String),
    /// Marks the review `RESOLVED`, appending the note if it isn't blank.
    Resolve { note: Option<String> },
}
