use crate::prefix_index::PrefixIndex;
use crate::record::{Contact, Project, Reminder, Timestamp};
use crate::timeline::TimeOrderedCollection;
use parking_lot::RwLock;
use tracing::debug;

/// One mutation against the store, already decoded and validated.
#[derive(Debug, Clone, PartialEq)]
pub enum OrganizerCommand {
    AddContact {
        name: String,
        phone: String,
        email: String,
    },
    DeleteContact {
        name: String,
    },
    AddReminder {
        text: String,
        due_at: Timestamp,
    },
    DeleteReminder {
        text: String,
        due_at: Timestamp,
    },
    AddProject {
        name: String,
        start: String,
        end: String,
    },
    DeleteProject {
        name: String,
        start: String,
    },
}

/// Owned copy of the whole organizer, detached from the live containers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizerState {
    pub contacts: Vec<Contact>,
    pub reminders: Vec<Reminder>,
    pub projects: Vec<Project>,
}

/// Composition root: one contact index and two timelines, each behind its own lock.
///
/// The containers never interact, so a mutation only ever takes a single write lock.
/// `current_state` takes all three read locks in declaration order, which keeps every
/// snapshot consistent with a complete sequence of prior mutations.
#[derive(Debug, Default)]
pub struct OrganizerStore {
    contacts: RwLock<PrefixIndex>,
    reminders: RwLock<TimeOrderedCollection<Reminder>>,
    projects: RwLock<TimeOrderedCollection<Project>>,
}

impl OrganizerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches `command` to its container. Returns whether the stored data changed;
    /// adds always count as a change, deletes of absent items do not.
    pub fn apply(&self, command: OrganizerCommand) -> bool {
        match command {
            OrganizerCommand::AddContact { name, phone, email } => {
                self.add_contact(&name, &phone, &email);
                true
            }
            OrganizerCommand::DeleteContact { name } => self.delete_contact(&name),
            OrganizerCommand::AddReminder { text, due_at } => {
                self.add_reminder(text, due_at);
                true
            }
            OrganizerCommand::DeleteReminder { text, due_at } => {
                self.delete_reminder(&text, due_at) > 0
            }
            OrganizerCommand::AddProject { name, start, end } => {
                self.add_project(name, start, end);
                true
            }
            OrganizerCommand::DeleteProject { name, start } => {
                self.delete_project(&name, &start) > 0
            }
        }
    }

    pub fn add_contact(&self, name: &str, phone: &str, email: &str) {
        self.contacts.write().insert(name, phone, email);
        debug!(contact.name = %name, "contact stored");
    }

    pub fn delete_contact(&self, name: &str) -> bool {
        let removed = self.contacts.write().delete(name);
        debug!(contact.name = %name, removed, "contact delete");
        removed
    }

    pub fn add_reminder(&self, text: impl Into<String>, due_at: Timestamp) {
        let reminder = Reminder::new(text, due_at);
        debug!(reminder.text = %reminder.text, reminder.due_at = %due_at, "reminder stored");
        self.reminders.write().add(reminder);
    }

    pub fn delete_reminder(&self, text: &str, due_at: Timestamp) -> usize {
        let removed = self.reminders.write().remove_matching(&due_at, text);
        debug!(reminder.text = %text, reminder.due_at = %due_at, removed, "reminder delete");
        removed
    }

    pub fn add_project(
        &self,
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) {
        let project = Project::new(name, start, end);
        debug!(
            project.name = %project.name,
            project.start = %project.start,
            project.end = %project.end,
            "project stored"
        );
        self.projects.write().add(project);
    }

    pub fn delete_project(&self, name: &str, start: &str) -> usize {
        let removed = self
            .projects
            .write()
            .remove_matching(&start.to_string(), name);
        debug!(project.name = %name, project.start = %start, removed, "project delete");
        removed
    }

    pub fn lookup_contact(&self, name: &str) -> Option<Contact> {
        self.contacts.read().lookup_exact(name)
    }

    pub fn search_contacts(&self, prefix: &str) -> Vec<Contact> {
        self.contacts.read().lookup_prefix(prefix)
    }

    pub fn current_state(&self) -> OrganizerState {
        let contacts = self.contacts.read();
        let reminders = self.reminders.read();
        let projects = self.projects.read();

        OrganizerState {
            contacts: contacts.list_all(),
            reminders: reminders.snapshot_sorted(),
            projects: projects.snapshot_sorted(),
        }
    }
}
