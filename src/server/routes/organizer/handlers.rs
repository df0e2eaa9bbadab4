use super::extract::OrganizerRequest;
use crate::server::router::AlmanacState;
use almanac_schema::{ContactView, DecodedAction, OrganizerStateBody};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::debug;

/// GET /api/data
pub async fn organizer_state_handler(State(state): State<AlmanacState>) -> Json<OrganizerStateBody> {
    Json(state.store.current_state().into())
}

/// POST /api/data
///
/// Applies one mutation and answers with the full state. An unrecognized `action` leaves
/// the store untouched and still returns the state.
pub(crate) async fn organizer_action_handler(
    State(state): State<AlmanacState>,
    OrganizerRequest(decoded): OrganizerRequest,
) -> Json<OrganizerStateBody> {
    match decoded {
        DecodedAction::Known(action) => {
            let tag = action.tag();
            let changed = state.store.apply(action.into());
            debug!(action = tag, changed, "[Organizer] Applied mutation");
        }
        DecodedAction::Unrecognized(tag) => {
            debug!(
                action = tag.as_deref().unwrap_or("<none>"),
                "[Organizer] Ignoring unrecognized action"
            );
        }
    }
    Json(state.store.current_state().into())
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactSearch {
    #[serde(default)]
    pub prefix: String,
}

/// GET /api/contacts?prefix=al
pub async fn contact_search_handler(
    State(state): State<AlmanacState>,
    Query(search): Query<ContactSearch>,
) -> Json<Vec<ContactView>> {
    let contacts = state.store.search_contacts(&search.prefix);
    Json(contacts.into_iter().map(Into::into).collect())
}

/// GET /api/contacts/{name}
///
/// A name with no contact answers `200` with `null`; absence is an empty result here.
pub async fn contact_lookup_handler(
    State(state): State<AlmanacState>,
    Path(name): Path<String>,
) -> Json<Option<ContactView>> {
    Json(state.store.lookup_contact(&name).map(Into::into))
}
