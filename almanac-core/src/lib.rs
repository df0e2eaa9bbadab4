pub mod prefix_index;
pub mod record;
pub mod store;
pub mod timeline;

pub use prefix_index::PrefixIndex;
pub use record::{Contact, Project, Reminder, Timestamp};
pub use store::{OrganizerCommand, OrganizerState, OrganizerStore};
pub use timeline::{TimeOrderedCollection, TimelineRecord};
