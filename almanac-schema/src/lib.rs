pub mod organizer;

pub use organizer::{
    ContactView, DecodedAction, OrganizerAction, OrganizerStateBody, ProjectView, ReminderView,
};
