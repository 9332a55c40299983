//! Work item view model and its classification enums.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Processing status of a work item.
///
/// Wire values are the fixed SCREAMING_SNAKE strings of the REST
/// contract. `Open` is the documented default for an absent status.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkItemStatus {
    /// Received, nobody started work yet.
    #[default]
    Open,
    /// A clerk is actively working the item.
    InProgress,
    /// Waiting on a third party.
    Blocked,
    /// Completed.
    Done,
}

impl WorkItemStatus {
    /// Wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Blocked => "BLOCKED",
            Self::Done => "DONE",
        }
    }
}

impl Display for WorkItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of business object a work item or document is attached to.
///
/// `Customer` is the documented default for an absent type.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainObjectType {
    /// A customer master record.
    #[default]
    Customer,
    /// An insurance contract.
    Contract,
    /// A claim file.
    Claim,
}

impl DomainObjectType {
    /// Wire string for this object type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Contract => "CONTRACT",
            Self::Claim => "CLAIM",
        }
    }
}

impl Display for DomainObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility scope of a basket listing: own items, the whole team, or a
/// named colleague's items.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BasketScope {
    /// Items assigned to the current user.
    #[default]
    My,
    /// Items assigned to anyone on the user's team.
    Team,
    /// Items assigned to one named colleague.
    Colleague,
}

impl BasketScope {
    /// Wire string for this scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::My => "MY",
            Self::Team => "TEAM",
            Self::Colleague => "COLLEAGUE",
        }
    }
}

impl Display for BasketScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task attached to a business object.
///
/// Created server-side on intake, mutated by applying an action, never
/// deleted by this layer. Absent timestamps normalize to the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Unique work item identifier.
    pub id: String,
    /// Kind of business object the item is attached to.
    pub object_type: DomainObjectType,
    /// Identifier of the attached business object.
    pub object_id: String,
    /// Human-readable label of the attached business object.
    pub object_label: String,
    /// Customer display name.
    pub customer_name: String,
    /// Related contract number.
    pub contract_no: String,
    /// Related claim number.
    pub claim_no: String,
    /// Short task title.
    pub title: String,
    /// Longer task description.
    pub description: String,
    /// Processing status.
    pub status: WorkItemStatus,
    /// Numeric priority; lower means more urgent.
    pub priority: i64,
    /// When the item entered the basket.
    pub received_at: DateTime<Utc>,
    /// Follow-up deadline.
    pub due_at: DateTime<Utc>,
    /// Clerk the item is assigned to.
    pub assigned_to: String,
    /// Owning team.
    pub team: String,
}
