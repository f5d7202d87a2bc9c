//! Testing utilities for the roster.
//!
//! This module provides:
//! - `TestHarness` for scripted roster scenarios
//! - Assertion helpers for verifying roster state

use crate::notify::NotificationKind;
use crate::roster::{Character, CharacterId, Filter, Roster};

/// Wraps a roster with panicking helpers so tests read as scripts.
pub struct TestHarness {
    pub roster: Roster,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Start from an empty roster.
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
        }
    }

    /// Start from the stock four-adventurer roster.
    pub fn sample() -> Self {
        Self {
            roster: Roster::sample(),
        }
    }

    /// Start from existing records.
    pub fn with_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let roster = Roster::with_characters(characters).expect("seed characters must be valid");
        Self { roster }
    }

    /// Add a character that must pass validation.
    pub fn add(&mut self, name: &str, class: &str, level: &str) -> CharacterId {
        self.roster
            .add(name, class, level)
            .unwrap_or_else(|e| panic!("add({name:?}, {class:?}, {level:?}) failed: {e}"))
    }

    /// Ids visible under `filter`, in order.
    pub fn ids(&self, filter: Filter) -> Vec<CharacterId> {
        self.roster.filtered(filter).map(|c| c.id).collect()
    }

    pub fn character(&self, id: CharacterId) -> &Character {
        self.roster
            .get(id)
            .unwrap_or_else(|| panic!("character {id} should exist"))
    }

    pub fn last_notification(&self) -> Option<(NotificationKind, &str)> {
        self.roster
            .notifications()
            .latest()
            .map(|n| (n.kind, n.message.as_str()))
    }

    // =========================================================================
    // Assertions
    // =========================================================================

    pub fn assert_len(&self, expected: usize) {
        assert_eq!(
            self.roster.len(),
            expected,
            "roster should have {expected} characters"
        );
    }

    pub fn assert_recruited(&self, id: CharacterId) {
        assert!(self.character(id).recruited, "{id} should be recruited");
    }

    pub fn assert_available(&self, id: CharacterId) {
        assert!(!self.character(id).recruited, "{id} should be available");
    }

    pub fn assert_absent(&self, id: CharacterId) {
        assert!(self.roster.get(id).is_none(), "{id} should be removed");
    }

    /// Available and recruited views are disjoint and together equal the
    /// full view.
    pub fn assert_filters_partition(&self) {
        let all = self.ids(Filter::All);
        let available = self.ids(Filter::Available);
        let recruited = self.ids(Filter::Recruited);

        assert!(
            available.iter().all(|id| !recruited.contains(id)),
            "available and recruited views overlap"
        );

        let mut union: Vec<_> = available.into_iter().chain(recruited).collect();
        union.sort();
        let mut sorted_all = all;
        sorted_all.sort();
        assert_eq!(union, sorted_all, "views do not cover the roster");
    }

    pub fn assert_last_notification(&self, kind: NotificationKind) {
        let last = self.last_notification().map(|(k, _)| k);
        assert_eq!(last, Some(kind), "unexpected last notification");
    }
}

/// Build a character record for seeding.
pub fn character(id: u32, name: &str, class: &str, level: u8, recruited: bool) -> Character {
    Character {
        id: CharacterId(id),
        name: name.to_string(),
        class: class.to_string(),
        level,
        recruited,
    }
}
