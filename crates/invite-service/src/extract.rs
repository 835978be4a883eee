//! Shape-tolerant readers for n8n payloads.
//!
//! The n8n API has returned users and invitation results in several shapes
//! across versions. Each reader walks an ordered strategy table and returns
//! the first hit, so the accepted shapes are listed in one place.

use serde_json::Value;
use tracing::debug;

/// One way of locating the member list inside a listing payload.
#[derive(Debug, Clone, Copy)]
pub struct MemberListStrategy {
    /// Short description used in logs.
    pub name: &'static str,
    /// Returns the list if the payload has this shape.
    pub locate: fn(&Value) -> Option<&Vec<Value>>,
}

fn bare_array(payload: &Value) -> Option<&Vec<Value>> {
    payload.as_array()
}

fn data_key(payload: &Value) -> Option<&Vec<Value>> {
    payload.get("data").and_then(Value::as_array)
}

fn users_key(payload: &Value) -> Option<&Vec<Value>> {
    payload.get("users").and_then(Value::as_array)
}

/// Listing shapes, in priority order.
pub const MEMBER_LIST_STRATEGIES: &[MemberListStrategy] = &[
    MemberListStrategy {
        name: "array",
        locate: bare_array,
    },
    MemberListStrategy {
        name: "data",
        locate: data_key,
    },
    MemberListStrategy {
        name: "users",
        locate: users_key,
    },
];

/// Locations of the invitation link inside a user record, in priority
/// order, as JSON pointers.
pub const INVITE_LINK_STRATEGIES: &[&str] = &[
    "/inviteAcceptUrl",
    "/data/inviteAcceptUrl",
    "/user/inviteAcceptUrl",
    "/inviteUrl",
];

/// Members contained in a listing payload; empty when no strategy matches.
pub fn member_list(payload: &Value) -> &[Value] {
    for strategy in MEMBER_LIST_STRATEGIES {
        if let Some(members) = (strategy.locate)(payload) {
            debug!(shape = strategy.name, count = members.len(), "Matched user listing shape");
            return members;
        }
    }

    debug!("Unrecognised user listing shape, treating as empty");
    &[]
}

/// The record describing the created user: the first element of an array
/// response, otherwise the response itself.
pub fn user_record(response: &Value) -> &Value {
    match response.as_array().and_then(|items| items.first()) {
        Some(first) if !first.is_null() => first,
        _ => response,
    }
}

/// First non-empty string found at one of [`INVITE_LINK_STRATEGIES`].
pub fn invite_link(record: &Value) -> Option<&str> {
    INVITE_LINK_STRATEGIES
        .iter()
        .filter_map(|pointer| record.pointer(pointer))
        .filter_map(Value::as_str)
        .find(|link| !link.is_empty())
}
