mod action;
mod state_body;

pub use action::{DecodedAction, OrganizerAction};
pub use state_body::{ContactView, OrganizerStateBody, ProjectView, ReminderView};
