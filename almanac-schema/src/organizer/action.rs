use almanac_core::{OrganizerCommand, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mutation request posted to `/api/data`, tagged by its `action` field.
///
/// Fields not named by a variant are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OrganizerAction {
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
        timestamp: Timestamp,
    },
    DeleteReminder {
        text: String,
        timestamp: Timestamp,
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

/// Outcome of looking at a request's `action` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedAction {
    Known(OrganizerAction),
    /// Tag absent, not a string, or not one of the known tags. Carries the raw tag when it
    /// was a string.
    Unrecognized(Option<String>),
}

impl OrganizerAction {
    pub const TAGS: [&'static str; 6] = [
        "add_contact",
        "delete_contact",
        "add_reminder",
        "delete_reminder",
        "add_project",
        "delete_project",
    ];

    pub fn is_known_tag(tag: &str) -> bool {
        Self::TAGS.contains(&tag)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            OrganizerAction::AddContact { .. } => "add_contact",
            OrganizerAction::DeleteContact { .. } => "delete_contact",
            OrganizerAction::AddReminder { .. } => "add_reminder",
            OrganizerAction::DeleteReminder { .. } => "delete_reminder",
            OrganizerAction::AddProject { .. } => "add_project",
            OrganizerAction::DeleteProject { .. } => "delete_project",
        }
    }

    /// Decodes a parsed request body.
    ///
    /// An unknown or missing tag is not an error; only a known tag whose fields are missing
    /// or mistyped fails.
    pub fn decode(value: Value) -> Result<DecodedAction, serde_json::Error> {
        match value.get("action") {
            Some(Value::String(tag)) if Self::is_known_tag(tag) => {}
            Some(Value::String(tag)) => return Ok(DecodedAction::Unrecognized(Some(tag.clone()))),
            _ => return Ok(DecodedAction::Unrecognized(None)),
        }
        serde_json::from_value(value).map(DecodedAction::Known)
    }
}

impl From<OrganizerAction> for OrganizerCommand {
    fn from(action: OrganizerAction) -> Self {
        match action {
            OrganizerAction::AddContact { name, phone, email } => {
                OrganizerCommand::AddContact { name, phone, email }
            }
            OrganizerAction::DeleteContact { name } => OrganizerCommand::DeleteContact { name },
            OrganizerAction::AddReminder { text, timestamp } => OrganizerCommand::AddReminder {
                text,
                due_at: timestamp,
            },
            OrganizerAction::DeleteReminder { text, timestamp } => {
                OrganizerCommand::DeleteReminder {
                    text,
                    due_at: timestamp,
                }
            }
            OrganizerAction::AddProject { name, start, end } => {
                OrganizerCommand::AddProject { name, start, end }
            }
            OrganizerAction::DeleteProject { name, start } => {
                OrganizerCommand::DeleteProject { name, start }
            }
        }
    }
}
