//! Classifies one kanata message into an [`Event`].
//!
//! kanata's TCP server writes one object per line, keyed by an
//! externally-tagged event name:
//!
//! ```json
//! {"LayerChange":{"new":"nav"}}
//! {"MessagePush":{"message":["mod:cmd:on"]}}
//! ```
//!
//! Anything else (other tags, missing fields, a malformed push payload)
//! decodes to `None`.

use crate::event::Event;
use crate::extract::{extract, truncate, Shape};

const LAYER_CHANGE_TAG: &str = "\"LayerChange\"";
const MESSAGE_PUSH_TAG: &str = "\"MessagePush\"";

/// Maximum modifier name length, in bytes.
pub const MAX_MOD_NAME_LEN: usize = 31;

/// Maximum modifier state length, in bytes.
pub const MAX_MOD_STATE_LEN: usize = 7;

/// Decode a single message.  Never fails; unrecognized input is `None`.
pub fn decode(message: &str) -> Option<Event> {
    if message.contains(LAYER_CHANGE_TAG) {
        let layer = extract(message, "new", Shape::Scalar)?;
        return Some(Event::LayerChange {
            layer: layer.to_string(),
        });
    }

    if message.contains(MESSAGE_PUSH_TAG) {
        let value = extract(message, "message", Shape::SingleElementArray)?;
        return parse_modifier(value);
    }

    None
}

/// Split a `group:name:state` push value.
///
/// Only the first two colons separate; the state runs to the first
/// whitespace and is bounded.  Empty names or states are rejected.
fn parse_modifier(value: &str) -> Option<Event> {
    let (group, rest) = value.split_once(':')?;
    let (name, state) = rest.split_once(':')?;
    let state = state.split_whitespace().next()?;

    let name = truncate(name, MAX_MOD_NAME_LEN);
    let state = truncate(state, MAX_MOD_STATE_LEN);
    if name.is_empty() {
        return None;
    }

    Some(Event::ModifierState {
        group: group.to_string(),
        name: name.to_string(),
        state: state.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(group: &str, name: &str, state: &str) -> Event {
        Event::ModifierState {
            group: group.into(),
            name: name.into(),
            state: state.into(),
        }
    }

    #[test]
    fn layer_change() {
        assert_eq!(
            decode(r#"{"LayerChange":{"new":"nav"}}"#),
            Some(Event::LayerChange { layer: "nav".into() })
        );
    }

    #[test]
    fn layer_change_without_field_is_dropped() {
        assert_eq!(decode(r#"{"LayerChange":{"old":"nav"}}"#), None);
        assert_eq!(decode(r#"{"LayerChange":{"new":"nav"#), None);
    }

    #[test]
    fn message_push() {
        assert_eq!(
            decode(r#"{"MessagePush":{"message":["mod:cmd:on"]}}"#),
            Some(modifier("mod", "cmd", "on"))
        );
    }

    #[test]
    fn message_push_keeps_group() {
        assert_eq!(
            decode(r#"{"MessagePush":{"message":["hyper:alt:off"]}}"#),
            Some(modifier("hyper", "alt", "off"))
        );
    }

    #[test]
    fn message_push_needs_two_separators() {
        assert_eq!(decode(r#"{"MessagePush":{"message":["mod:cmd"]}}"#), None);
        assert_eq!(decode(r#"{"MessagePush":{"message":["nocolons"]}}"#), None);
    }

    #[test]
    fn message_push_rejects_empty_parts() {
        assert_eq!(decode(r#"{"MessagePush":{"message":["mod::on"]}}"#), None);
        assert_eq!(decode(r#"{"MessagePush":{"message":["mod:cmd:"]}}"#), None);
    }

    #[test]
    fn extra_colons_stay_in_state() {
        assert_eq!(
            decode(r#"{"MessagePush":{"message":["mod:cmd:on:x"]}}"#),
            Some(modifier("mod", "cmd", "on:x"))
        );
    }

    #[test]
    fn state_is_bounded() {
        assert_eq!(
            decode(r#"{"MessagePush":{"message":["mod:cmd:enabled-now"]}}"#),
            Some(modifier("mod", "cmd", "enabled"))
        );
        assert_eq!(
            decode(r#"{"MessagePush":{"message":["mod:cmd:on now"]}}"#),
            Some(modifier("mod", "cmd", "on"))
        );
    }

    #[test]
    fn name_is_bounded() {
        let name = "n".repeat(40);
        let msg = format!(r#"{{"MessagePush":{{"message":["mod:{}:on"]}}}}"#, name);
        match decode(&msg) {
            Some(Event::ModifierState { name, .. }) => assert_eq!(name.len(), MAX_MOD_NAME_LEN),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn message_push_with_scalar_message_is_dropped() {
        assert_eq!(decode(r#"{"MessagePush":{"message":"mod:cmd:on"}}"#), None);
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(decode(r#"{"Other":{}}"#), None);
        assert_eq!(decode(r#"{"CurrentLayerName":{"name":"base"}}"#), None);
        assert_eq!(decode("garbage"), None);
        assert_eq!(decode(""), None);
    }

    #[test]
    fn layer_change_takes_priority() {
        let msg = r#"{"LayerChange":{"new":"nav"},"MessagePush":{"message":["mod:cmd:on"]}}"#;
        assert_eq!(decode(msg), Some(Event::LayerChange { layer: "nav".into() }));
    }
}
