//! Mutation commands and their action-dependent validation.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Action applied to a work item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkItemAction {
    /// Begin working the item.
    Start,
    /// Hand the item to another clerk. Requires an assignee.
    Forward,
    /// Defer the item to a later date. Requires a follow-up timestamp.
    Reschedule,
    /// Finish the item.
    Complete,
}

impl WorkItemAction {
    /// Wire string for this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Forward => "FORWARD",
            Self::Reschedule => "RESCHEDULE",
            Self::Complete => "COMPLETE",
        }
    }
}

impl Display for WorkItemAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection reasons for an incomplete action command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// FORWARD was requested without naming an assignee.
    MissingAssignee,
    /// RESCHEDULE was requested without a follow-up timestamp.
    MissingFollowUp,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAssignee => f.write_str("FORWARD requires an assignee"),
            Self::MissingFollowUp => f.write_str("RESCHEDULE requires a follow-up timestamp"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Command body for `POST /work-items/{id}/actions`.
///
/// `assignee` and `follow_up_at` are only meaningful for FORWARD and
/// RESCHEDULE respectively; other actions ignore them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemActionCommand {
    /// The action to apply.
    pub action: WorkItemAction,
    /// Target clerk for FORWARD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// New follow-up deadline for RESCHEDULE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_at: Option<DateTime<Utc>>,
    /// Free-text remark recorded with the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl WorkItemActionCommand {
    /// A bare command for the given action, without optional fields.
    #[must_use]
    pub const fn new(action: WorkItemAction) -> Self {
        Self {
            action,
            assignee: None,
            follow_up_at: None,
            comment: None,
        }
    }

    /// A FORWARD command naming the receiving clerk.
    #[must_use]
    pub fn forward(assignee: impl Into<String>) -> Self {
        Self {
            assignee: Some(assignee.into()),
            ..Self::new(WorkItemAction::Forward)
        }
    }

    /// A RESCHEDULE command with the new follow-up deadline.
    #[must_use]
    pub fn reschedule(follow_up_at: DateTime<Utc>) -> Self {
        Self {
            follow_up_at: Some(follow_up_at),
            ..Self::new(WorkItemAction::Reschedule)
        }
    }

    /// Check action-dependent field requirements.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if FORWARD lacks a non-blank assignee or
    /// RESCHEDULE lacks a follow-up timestamp.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self.action {
            WorkItemAction::Forward => {
                let named = self
                    .assignee
                    .as_deref()
                    .is_some_and(|name| !name.trim().is_empty());
                if named {
                    Ok(())
                } else {
                    Err(CommandError::MissingAssignee)
                }
            }
            WorkItemAction::Reschedule => {
                if self.follow_up_at.is_some() {
                    Ok(())
                } else {
                    Err(CommandError::MissingFollowUp)
                }
            }
            WorkItemAction::Start | WorkItemAction::Complete => Ok(()),
        }
    }
}

/// Command body for `POST /work-items/context/{objectType}/{objectId}/documents`.
///
/// The server assigns the document id, the upload timestamp, and may
/// extend the index keywords; the created document therefore comes back
/// from the server rather than being constructed client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentCommand {
    /// Original file name.
    pub file_name: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// File size in bytes.
    pub size_in_bytes: u64,
    /// Index keywords in index order.
    pub index_keywords: Vec<String>,
    /// Uploading user.
    pub uploaded_by: String,
}
