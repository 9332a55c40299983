//! Total view models consumed by the console.
//!
//! Every field of every model is present — the wire layer (`crate::api`)
//! fills defaults before a value reaches this module's types.

pub mod command;
pub mod context;
pub mod document;
pub mod page;
pub mod work_item;

pub use command::{CommandError, UploadDocumentCommand, WorkItemAction, WorkItemActionCommand};
pub use context::{ContextView, ProtocolEntry};
pub use document::Document;
pub use page::Page;
pub use work_item::{BasketScope, DomainObjectType, WorkItem, WorkItemStatus};
