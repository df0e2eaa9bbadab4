use crate::error::AlmanacError;
use crate::utils::logging::with_pretty_json_debug;
use almanac_schema::{DecodedAction, OrganizerAction};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use tracing::debug;

pub(crate) struct OrganizerRequest(pub(crate) DecodedAction);

impl<S> FromRequest<S> for OrganizerRequest
where
    S: Send + Sync,
{
    type Rejection = AlmanacError;

    /// Extract a `/api/data` mutation.
    ///
    /// The body is read as raw bytes so requests without a JSON `Content-Type` (plain
    /// `fetch` calls from the UI) are accepted.
    ///
    /// Error handling:
    /// - unreadable body, invalid JSON, or a non-object root => `MALFORMED_BODY`.
    /// - known `action` with missing or mistyped fields => `INVALID_INPUT`.
    /// - unknown or missing `action` is not rejected; it decodes to `Unrecognized`.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AlmanacError::MalformedBody(rejection.body_text()))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| AlmanacError::MalformedBody(err.to_string()))?;
        if !value.is_object() {
            return Err(AlmanacError::MalformedBody(
                "request body must be a JSON object".to_string(),
            ));
        }

        let known_tag = value
            .get("action")
            .and_then(Value::as_str)
            .and_then(|tag| OrganizerAction::TAGS.into_iter().find(|known| *known == tag));

        let decoded = OrganizerAction::decode(value).map_err(|err| AlmanacError::InvalidInput {
            action: known_tag.unwrap_or("unknown"),
            message: err.to_string(),
        })?;

        if let DecodedAction::Known(action) = &decoded {
            with_pretty_json_debug(action, |pretty_body| {
                debug!(
                    channel = "organizer",
                    req.action = action.tag(),
                    body = %pretty_body,
                    "[Organizer] Decoded mutation request"
                );
            });
        }

        Ok(Self(decoded))
    }
}
