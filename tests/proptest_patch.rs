// SPDX-License-Identifier: MIT
//! Property-based tests.
//!
//! 1. Title normalization: trimming is total, idempotent, and rejects blanks.
//! 2. Patch deserialization: absent, null, and present fields map to the
//!    three-state `Option<Option<_>>` shape without loss.
//!
//! Run with: cargo test --test proptest_patch

use proptest::prelude::*;
use taskd::tasks::{model::normalize_title, TaskPatch};

// ─── 1. Title normalization properties ───────────────────────────────────────

proptest! {
    /// Whatever comes in, an accepted title has no leading/trailing whitespace
    /// and is never empty.
    #[test]
    fn normalized_titles_are_trimmed_and_non_empty(raw in ".*") {
        if let Some(title) = normalize_title(&raw) {
            prop_assert!(!title.is_empty(), "accepted an empty title from {raw:?}");
            prop_assert_eq!(title.trim(), title.as_str(), "title kept surrounding whitespace");
        }
    }

    /// Normalizing an already-normalized title changes nothing.
    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        if let Some(once) = normalize_title(&raw) {
            let twice = normalize_title(&once);
            prop_assert_eq!(twice.as_deref(), Some(once.as_str()));
        }
    }

    /// Strings made only of whitespace are always rejected.
    #[test]
    fn whitespace_only_is_rejected(ws in "[ \t\r\n]*") {
        prop_assert_eq!(normalize_title(&ws), None, "accepted whitespace-only {:?}", ws);
    }

    /// A string with at least one non-whitespace character is always accepted.
    #[test]
    fn non_blank_is_accepted(core in "[a-zA-Z0-9]{1,40}", pad in "[ \t]{0,8}") {
        let raw = format!("{pad}{core}{pad}");
        prop_assert_eq!(normalize_title(&raw), Some(core));
    }
}

// ─── 2. Patch deserialization properties ─────────────────────────────────────

/// The three ways a nullable field can appear in a patch body.
#[derive(Debug, Clone)]
enum Field {
    Absent,
    Null,
    Value(String),
}

fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Absent),
        Just(Field::Null),
        "[a-zA-Z0-9 ]{0,24}".prop_map(Field::Value),
    ]
}

/// Render a patch body with each field absent, null, or set.
fn patch_json(title: &Field, description: &Field, completed: &Option<bool>) -> String {
    let mut parts = Vec::new();
    match title {
        Field::Absent => {}
        Field::Null => parts.push("\"title\": null".to_string()),
        Field::Value(v) => parts.push(format!("\"title\": {}", serde_json::to_string(v).unwrap())),
    }
    match description {
        Field::Absent => {}
        Field::Null => parts.push("\"description\": null".to_string()),
        Field::Value(v) => {
            parts.push(format!("\"description\": {}", serde_json::to_string(v).unwrap()))
        }
    }
    if let Some(c) = completed {
        parts.push(format!("\"completed\": {c}"));
    }
    format!("{{{}}}", parts.join(", "))
}

proptest! {
    /// Absent fields come out as `None`, null as `Some(None)`, and values as
    /// `Some(Some(_))` — the patch never confuses "leave alone" with "clear".
    #[test]
    fn three_states_survive_deserialization(
        title in field_strategy(),
        description in field_strategy(),
        completed in prop::option::of(any::<bool>()),
    ) {
        let body = patch_json(&title, &description, &completed);
        let patch: TaskPatch = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("failed to parse {body}: {e}"));

        match &title {
            Field::Absent => prop_assert!(patch.title.is_none()),
            Field::Null => prop_assert_eq!(&patch.title, &Some(None)),
            Field::Value(v) => prop_assert_eq!(&patch.title, &Some(Some(v.clone()))),
        }
        match &description {
            Field::Absent => prop_assert!(patch.description.is_none()),
            Field::Null => prop_assert_eq!(&patch.description, &Some(None)),
            Field::Value(v) => prop_assert_eq!(&patch.description, &Some(Some(v.clone()))),
        }
        prop_assert_eq!(patch.completed, completed);
    }

    /// A patch is empty exactly when every field was absent.
    #[test]
    fn emptiness_matches_absence(
        title in field_strategy(),
        description in field_strategy(),
        completed in prop::option::of(any::<bool>()),
    ) {
        let body = patch_json(&title, &description, &completed);
        let patch: TaskPatch = serde_json::from_str(&body).unwrap();

        let all_absent = matches!(title, Field::Absent)
            && matches!(description, Field::Absent)
            && completed.is_none();
        prop_assert_eq!(patch.is_empty(), all_absent, "body was {}", body);
    }
}
