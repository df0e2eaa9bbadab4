use almanac_core::{Contact, OrganizerState, Project, Reminder, Timestamp};
use serde::{Deserialize, Serialize};

/// Full organizer state as shipped on every round trip.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrganizerStateBody {
    pub contacts: Vec<ContactView>,
    pub reminders: Vec<ReminderView>,
    pub projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactView {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReminderView {
    pub text: String,
    pub time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl From<Contact> for ContactView {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
        }
    }
}

impl From<Reminder> for ReminderView {
    fn from(reminder: Reminder) -> Self {
        Self {
            text: reminder.text,
            time: reminder.due_at,
        }
    }
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            name: project.name,
            start: project.start,
            end: project.end,
        }
    }
}

impl From<OrganizerState> for OrganizerStateBody {
    fn from(state: OrganizerState) -> Self {
        Self {
            contacts: state.contacts.into_iter().map(Into::into).collect(),
            reminders: state.reminders.into_iter().map(Into::into).collect(),
            projects: state.projects.into_iter().map(Into::into).collect(),
        }
    }
}
