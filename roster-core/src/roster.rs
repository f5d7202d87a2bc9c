//! The roster store.
//!
//! A [`Roster`] owns an ordered list of [`Character`] records and is the only
//! thing allowed to mutate it. Every mutation (and every rejected request)
//! posts a message to the roster's [`NotificationQueue`] so that whatever UI
//! sits on top can show transient feedback.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::notify::{NotificationKind, NotificationQueue};

/// Lowest level a character may have.
pub const LEVEL_MIN: u8 = 1;

/// Highest level a character may have.
pub const LEVEL_MAX: u8 = 100;

/// Classes offered as suggestions by the add form.
pub const SUGGESTED_CLASSES: [&str; 6] = [
    "Guerreiro",
    "Mago",
    "Arqueiro",
    "Ladino",
    "Clérigo",
    "Paladino",
];

/// Unique, never-reused identifier of a roster entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: String,
    pub level: u8,
    #[serde(default)]
    pub recruited: bool,
}

impl Character {
    /// Short status label used by the list views.
    pub fn status_label(&self) -> &'static str {
        if self.recruited {
            "Recruited"
        } else {
            "Available"
        }
    }
}

/// Which subset of the roster a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Available,
    Recruited,
}

impl Filter {
    /// Every filter, in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Available, Filter::Recruited];

    /// Whether a character belongs to this view.
    pub fn matches(self, character: &Character) -> bool {
        match self {
            Filter::All => true,
            Filter::Available => !character.recruited,
            Filter::Recruited => character.recruited,
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Available => "Available",
            Filter::Recruited => "Recruited",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Available,
            Filter::Available => Filter::Recruited,
            Filter::Recruited => Filter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Filter::All => Filter::Recruited,
            Filter::Recruited => Filter::Available,
            Filter::Available => Filter::All,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Available => "available",
            Filter::Recruited => "recruited",
        };
        f.write_str(name)
    }
}

/// Error returned when a filter name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected all, available or recruited)")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "available" => Ok(Filter::Available),
            "recruited" => Ok(Filter::Recruited),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

/// `(recruited, total)` summary of the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RosterCounts {
    pub recruited: usize,
    pub total: usize,
}

impl From<RosterCounts> for (usize, usize) {
    fn from(counts: RosterCounts) -> Self {
        (counts.recruited, counts.total)
    }
}

impl fmt::Display for RosterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} recruited", self.recruited, self.total)
    }
}

/// Input field of the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Class,
    Level,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "Name",
            Field::Class => "Class",
            Field::Level => "Level",
        };
        f.write_str(name)
    }
}

/// Why a new character was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(Field),

    #[error("Level must start with a number, got '{0}'")]
    LevelNotANumber(String),

    #[error("Level must be between 1 and 100, got {0}")]
    LevelOutOfRange(i64),
}

/// Errors from roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Invalid character: {0}")]
    Validation(#[from] ValidationError),

    #[error("No character with id {0}")]
    NotFound(CharacterId),

    #[error("Duplicate character id {0}")]
    DuplicateId(CharacterId),

    #[error("No character ids left to assign")]
    IdSpaceExhausted,
}

/// A validated character that has not been inserted yet.
///
/// Only [`validate`] can build one, so holding a `Draft` proves the fields
/// passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    name: String,
    class: String,
    level: u8,
}

impl Draft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// Validate raw form input.
///
/// Fields are trimmed. Emptiness is checked for all three fields before the
/// level is parsed. The level is read from the leading integer of the text,
/// so `"12.5"` is level 12 and `"15abc"` is level 15.
pub fn validate(name: &str, class: &str, level_text: &str) -> Result<Draft, ValidationError> {
    let name = name.trim();
    let class = class.trim();
    let level_text = level_text.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyField(Field::Name));
    }
    if class.is_empty() {
        return Err(ValidationError::EmptyField(Field::Class));
    }
    if level_text.is_empty() {
        return Err(ValidationError::EmptyField(Field::Level));
    }

    let level = leading_integer(level_text)
        .ok_or_else(|| ValidationError::LevelNotANumber(level_text.to_string()))?;
    let level = parse_level(level)?;

    Ok(Draft {
        name: name.to_string(),
        class: class.to_string(),
        level,
    })
}

/// Optional sign followed by at least one digit, ignoring whatever comes
/// after the digits. Values beyond `i64` saturate.
fn leading_integer(text: &str) -> Option<i64> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let digit = i64::from(digit - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }

    seen.then_some(value)
}

fn parse_level(level: i64) -> Result<u8, ValidationError> {
    if (i64::from(LEVEL_MIN)..=i64::from(LEVEL_MAX)).contains(&level) {
        // In range, so the cast is lossless.
        Ok(level as u8)
    } else {
        Err(ValidationError::LevelOutOfRange(level))
    }
}

/// Result of a recruit request that referenced an existing character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecruitOutcome {
    /// The character flipped from available to recruited.
    Recruited,
    /// The character was already recruited; nothing changed.
    AlreadyRecruited,
    /// The confirmation callback declined; nothing changed.
    Declined,
}

/// Ordered, in-memory roster of characters.
#[derive(Debug, Clone)]
pub struct Roster {
    characters: Vec<Character>,
    next_id: u32,
    notifications: NotificationQueue,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create an empty roster. The first character gets id 1.
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 1,
            notifications: NotificationQueue::default(),
        }
    }

    /// Create a roster from existing records.
    ///
    /// Names and classes are trimmed and must be non-empty, levels must be in
    /// range and ids must be unique. The next id continues after the largest
    /// seeded id.
    pub fn with_characters(
        characters: impl IntoIterator<Item = Character>,
    ) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        let mut stored = Vec::new();

        for character in characters {
            if !seen.insert(character.id) {
                return Err(RosterError::DuplicateId(character.id));
            }
            let draft = validate(
                &character.name,
                &character.class,
                &character.level.to_string(),
            )?;
            stored.push(Character {
                id: character.id,
                name: draft.name,
                class: draft.class,
                level: draft.level,
                recruited: character.recruited,
            });
        }

        let next_id = stored
            .iter()
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(RosterError::IdSpaceExhausted)?;

        Ok(Self {
            characters: stored,
            next_id,
            notifications: NotificationQueue::default(),
        })
    }

    /// The stock four-adventurer guild the app starts with.
    pub fn sample() -> Self {
        let seed = [
            (1, "Aragorn", "Guerreiro", 15, false),
            (2, "Gandalf", "Mago", 50, true),
            (3, "Legolas", "Arqueiro", 12, false),
            (4, "Gimli", "Guerreiro", 10, true),
        ];

        let characters = seed
            .into_iter()
            .map(|(id, name, class, level, recruited)| Character {
                id: CharacterId(id),
                name: name.to_string(),
                class: class.to_string(),
                level,
                recruited,
            })
            .collect();

        Self {
            characters,
            next_id: 5,
            notifications: NotificationQueue::default(),
        }
    }

    /// Replace the notification display duration.
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notifications.set_ttl(ttl);
        self
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate and append a new, unrecruited character.
    pub fn add(
        &mut self,
        name: &str,
        class: &str,
        level_text: &str,
    ) -> Result<CharacterId, RosterError> {
        match validate(name, class, level_text) {
            Ok(draft) => self.insert(draft),
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Like [`Roster::add`], but asks `confirm` about the validated draft
    /// first. Returns `Ok(None)` when declined.
    pub fn add_with<F>(
        &mut self,
        name: &str,
        class: &str,
        level_text: &str,
        confirm: F,
    ) -> Result<Option<CharacterId>, RosterError>
    where
        F: FnOnce(&Draft) -> bool,
    {
        let draft = match validate(name, class, level_text) {
            Ok(draft) => draft,
            Err(err) => return Err(self.reject(err.into())),
        };

        if !confirm(&draft) {
            info!(name = %draft.name, "add declined");
            return Ok(None);
        }

        self.insert(draft).map(Some)
    }

    /// Append a validated draft and return its id.
    ///
    /// Fails once every id has been handed out; ids are never reused.
    pub fn insert(&mut self, draft: Draft) -> Result<CharacterId, RosterError> {
        let Some(next_id) = self.next_id.checked_add(1) else {
            return Err(self.reject(RosterError::IdSpaceExhausted));
        };
        let id = CharacterId(self.next_id);
        self.next_id = next_id;

        info!(%id, name = %draft.name, class = %draft.class, level = draft.level, "character added");
        self.notifications.push(
            NotificationKind::Success,
            format!("{} was added to the roster!", draft.name),
        );

        self.characters.push(Character {
            id,
            name: draft.name,
            class: draft.class,
            level: draft.level,
            recruited: false,
        });

        Ok(id)
    }

    /// Record a rejected request: log it, post an error or warning
    /// notification and hand the error back.
    pub fn reject(&mut self, err: RosterError) -> RosterError {
        warn!(error = %err, "roster request rejected");
        let kind = match err {
            RosterError::NotFound(_) => NotificationKind::Warning,
            RosterError::Validation(_)
            | RosterError::DuplicateId(_)
            | RosterError::IdSpaceExhausted => NotificationKind::Error,
        };
        let message = match &err {
            RosterError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };
        self.notifications.push(kind, message);
        err
    }

    /// Mark a character as recruited.
    pub fn recruit(&mut self, id: CharacterId) -> Result<RecruitOutcome, RosterError> {
        self.recruit_with(id, |_| true)
    }

    /// Like [`Roster::recruit`], but asks `confirm` before flipping the flag.
    ///
    /// `confirm` is not called for unknown ids or characters that are already
    /// recruited.
    pub fn recruit_with<F>(
        &mut self,
        id: CharacterId,
        confirm: F,
    ) -> Result<RecruitOutcome, RosterError>
    where
        F: FnOnce(&Character) -> bool,
    {
        let Some(index) = self.position(id) else {
            return Err(self.reject(RosterError::NotFound(id)));
        };

        if self.characters[index].recruited {
            let name = self.characters[index].name.clone();
            info!(%id, "character already recruited");
            self.notifications.push(
                NotificationKind::Warning,
                format!("{name} is already in the guild"),
            );
            return Ok(RecruitOutcome::AlreadyRecruited);
        }

        if !confirm(&self.characters[index]) {
            info!(%id, "recruit declined");
            return Ok(RecruitOutcome::Declined);
        }

        let character = &mut self.characters[index];
        character.recruited = true;
        info!(%id, name = %character.name, "character recruited");
        let message = format!("{} was recruited to the guild!", character.name);
        self.notifications.push(NotificationKind::Success, message);

        Ok(RecruitOutcome::Recruited)
    }

    /// Remove a character and return it.
    pub fn remove(&mut self, id: CharacterId) -> Result<Character, RosterError> {
        let Some(index) = self.position(id) else {
            return Err(self.reject(RosterError::NotFound(id)));
        };
        Ok(self.take(index))
    }

    /// Like [`Roster::remove`], but asks `confirm` first. Returns `Ok(None)`
    /// when declined.
    pub fn remove_with<F>(
        &mut self,
        id: CharacterId,
        confirm: F,
    ) -> Result<Option<Character>, RosterError>
    where
        F: FnOnce(&Character) -> bool,
    {
        let Some(index) = self.position(id) else {
            return Err(self.reject(RosterError::NotFound(id)));
        };

        if !confirm(&self.characters[index]) {
            info!(%id, "remove declined");
            return Ok(None);
        }

        Ok(Some(self.take(index)))
    }

    fn take(&mut self, index: usize) -> Character {
        let character = self.characters.remove(index);
        info!(id = %character.id, name = %character.name, "character removed");
        // Removal uses the error colour, matching the destructive action.
        self.notifications.push(
            NotificationKind::Error,
            format!("{} was removed from the guild!", character.name),
        );
        character
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Characters matching `filter`, in stored order.
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Character> + '_ {
        self.characters.iter().filter(move |c| filter.matches(c))
    }

    /// Recruited and total counts.
    pub fn counts(&self) -> RosterCounts {
        RosterCounts {
            recruited: self.characters.iter().filter(|c| c.recruited).count(),
            total: self.characters.len(),
        }
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The id the next added character will receive.
    pub fn next_id(&self) -> CharacterId {
        CharacterId(self.next_id)
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    fn position(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aragorn_only() -> Roster {
        Roster::with_characters([Character {
            id: CharacterId(1),
            name: "Aragorn".to_string(),
            class: "Guerreiro".to_string(),
            level: 15,
            recruited: false,
        }])
        .unwrap()
    }

    fn last_kind(roster: &Roster) -> Option<NotificationKind> {
        roster.notifications().latest().map(|n| n.kind)
    }

    #[test]
    fn test_add_appends_unrecruited() {
        let mut roster = Roster::new();
        let id = roster.add("  Frodo ", " Ladino ", " 3 ").unwrap();

        assert_eq!(id, CharacterId(1));
        assert_eq!(roster.len(), 1);
        let frodo = roster.get(id).unwrap();
        assert_eq!(frodo.name, "Frodo");
        assert_eq!(frodo.class, "Ladino");
        assert_eq!(frodo.level, 3);
        assert!(!frodo.recruited);
        assert_eq!(last_kind(&roster), Some(NotificationKind::Success));
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let cases = [
            ("", "Mago", "10", ValidationError::EmptyField(Field::Name)),
            ("   ", "Mago", "10", ValidationError::EmptyField(Field::Name)),
            ("Saruman", "", "10", ValidationError::EmptyField(Field::Class)),
            ("Saruman", "Mago", " ", ValidationError::EmptyField(Field::Level)),
            (
                "Saruman",
                "Mago",
                "abc",
                ValidationError::LevelNotANumber("abc".to_string()),
            ),
            (
                "Saruman",
                "Mago",
                "-",
                ValidationError::LevelNotANumber("-".to_string()),
            ),
            (
                "Saruman",
                "Mago",
                "lv10",
                ValidationError::LevelNotANumber("lv10".to_string()),
            ),
            ("Saruman", "Mago", "0", ValidationError::LevelOutOfRange(0)),
            ("Saruman", "Mago", "101", ValidationError::LevelOutOfRange(101)),
            ("Saruman", "Mago", "-4", ValidationError::LevelOutOfRange(-4)),
        ];

        for (name, class, level, expected) in cases {
            let mut roster = aragorn_only();
            let err = roster.add(name, class, level).unwrap_err();
            assert_eq!(err, RosterError::Validation(expected), "input {name:?} {class:?} {level:?}");
            assert_eq!(roster.len(), 1);
            assert_eq!(roster.next_id(), CharacterId(2));
            assert_eq!(last_kind(&roster), Some(NotificationKind::Error));
        }
    }

    #[test]
    fn test_empty_fields_checked_before_level() {
        let err = validate("", "Mago", "abc").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField(Field::Name));
    }

    #[test]
    fn test_level_reads_leading_integer() {
        let mut roster = Roster::new();
        let id = roster.add("Pippin", "Ladino", "12.5").unwrap();
        assert_eq!(roster.get(id).unwrap().level, 12);

        let id = roster.add("Merry", "Ladino", "15abc").unwrap();
        assert_eq!(roster.get(id).unwrap().level, 15);

        assert_eq!(validate("A", "B", "+7").unwrap().level(), 7);
        assert_eq!(validate("A", "B", "1e2").unwrap().level(), 1);
        assert_eq!(validate("A", "B", "007").unwrap().level(), 7);
    }

    #[test]
    fn test_huge_level_is_out_of_range() {
        assert_eq!(
            validate("A", "B", "99999999999999999999").unwrap_err(),
            ValidationError::LevelOutOfRange(i64::MAX)
        );
        assert_eq!(
            validate("A", "B", "-99999999999999999999").unwrap_err(),
            ValidationError::LevelOutOfRange(i64::MIN)
        );
        assert_eq!(
            validate("A", "B", "1000.5").unwrap_err(),
            ValidationError::LevelOutOfRange(1000)
        );
    }

    #[test]
    fn test_level_bounds_inclusive() {
        assert_eq!(validate("A", "B", "1").unwrap().level(), 1);
        assert_eq!(validate("A", "B", "100").unwrap().level(), 100);
    }

    #[test]
    fn test_recruit_flips_only_flag() {
        let mut roster = aragorn_only();
        let before = roster.get(CharacterId(1)).unwrap().clone();

        let outcome = roster.recruit(CharacterId(1)).unwrap();
        assert_eq!(outcome, RecruitOutcome::Recruited);

        let after = roster.get(CharacterId(1)).unwrap();
        assert!(after.recruited);
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.class, before.class);
        assert_eq!(after.level, before.level);
    }

    #[test]
    fn test_recruit_is_idempotent() {
        let mut roster = aragorn_only();
        roster.recruit(CharacterId(1)).unwrap();
        let snapshot = roster.characters().to_vec();

        let outcome = roster.recruit(CharacterId(1)).unwrap();
        assert_eq!(outcome, RecruitOutcome::AlreadyRecruited);
        assert_eq!(roster.characters(), snapshot.as_slice());
        assert_eq!(last_kind(&roster), Some(NotificationKind::Warning));
    }

    #[test]
    fn test_recruit_unknown_id() {
        let mut roster = aragorn_only();
        let err = roster.recruit(CharacterId(42)).unwrap_err();
        assert_eq!(err, RosterError::NotFound(CharacterId(42)));
        assert!(!roster.get(CharacterId(1)).unwrap().recruited);
        assert_eq!(last_kind(&roster), Some(NotificationKind::Warning));
    }

    #[test]
    fn test_recruit_declined() {
        let mut roster = aragorn_only();
        let pushed = roster.notifications().len();

        let outcome = roster
            .recruit_with(CharacterId(1), |c| {
                assert_eq!(c.name, "Aragorn");
                false
            })
            .unwrap();

        assert_eq!(outcome, RecruitOutcome::Declined);
        assert!(!roster.get(CharacterId(1)).unwrap().recruited);
        assert_eq!(roster.notifications().len(), pushed);
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::sample();
        let removed = roster.remove(CharacterId(3)).unwrap();

        assert_eq!(removed.name, "Legolas");
        assert_eq!(roster.len(), 3);
        assert!(roster.get(CharacterId(3)).is_none());
        assert_eq!(last_kind(&roster), Some(NotificationKind::Error));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut roster = Roster::sample();
        let err = roster.remove(CharacterId(99)).unwrap_err();
        assert_eq!(err, RosterError::NotFound(CharacterId(99)));
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_remove_declined_keeps_character() {
        let mut roster = Roster::sample();
        let removed = roster.remove_with(CharacterId(1), |_| false).unwrap();
        assert!(removed.is_none());
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_remove_confirm_not_called_for_unknown() {
        let mut roster = Roster::sample();
        let result = roster.remove_with(CharacterId(77), |_| panic!("should not ask"));
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_not_reused() {
        let mut roster = Roster::new();
        let first = roster.add("A", "B", "1").unwrap();
        roster.remove(first).unwrap();
        let second = roster.add("C", "D", "2").unwrap();
        assert_eq!(first, CharacterId(1));
        assert_eq!(second, CharacterId(2));
    }

    #[test]
    fn test_add_with_confirmation() {
        let mut roster = Roster::new();

        let declined = roster
            .add_with("Boromir", "Guerreiro", "20", |draft| {
                assert_eq!(draft.name(), "Boromir");
                assert_eq!(draft.level(), 20);
                false
            })
            .unwrap();
        assert!(declined.is_none());
        assert!(roster.is_empty());

        let accepted = roster.add_with("Boromir", "Guerreiro", "20", |_| true).unwrap();
        assert_eq!(accepted, Some(CharacterId(1)));
    }

    #[test]
    fn test_filters_partition_roster() {
        let roster = Roster::sample();

        let all: Vec<_> = roster.filtered(Filter::All).map(|c| c.id).collect();
        let available: Vec<_> = roster.filtered(Filter::Available).map(|c| c.id).collect();
        let recruited: Vec<_> = roster.filtered(Filter::Recruited).map(|c| c.id).collect();

        assert_eq!(all.len(), 4);
        assert_eq!(available, vec![CharacterId(1), CharacterId(3)]);
        assert_eq!(recruited, vec![CharacterId(2), CharacterId(4)]);
        assert!(available.iter().all(|id| !recruited.contains(id)));
    }

    #[test]
    fn test_counts() {
        let roster = Roster::sample();
        assert_eq!(<(usize, usize)>::from(roster.counts()), (2, 4));
        assert_eq!(roster.counts().to_string(), "2/4 recruited");
    }

    #[test]
    fn test_with_characters_rejects_duplicates() {
        let character = Character {
            id: CharacterId(7),
            name: "Sam".to_string(),
            class: "Ladino".to_string(),
            level: 2,
            recruited: false,
        };
        let err = Roster::with_characters([character.clone(), character]).unwrap_err();
        assert_eq!(err, RosterError::DuplicateId(CharacterId(7)));
    }

    #[test]
    fn test_with_characters_continues_ids() {
        let roster = Roster::with_characters([Character {
            id: CharacterId(9),
            name: "Sam".to_string(),
            class: "Ladino".to_string(),
            level: 2,
            recruited: false,
        }])
        .unwrap();
        assert_eq!(roster.next_id(), CharacterId(10));
    }

    #[test]
    fn test_with_characters_at_max_id_is_rejected() {
        let err = Roster::with_characters([Character {
            id: CharacterId(u32::MAX),
            name: "Sam".to_string(),
            class: "Ladino".to_string(),
            level: 2,
            recruited: false,
        }])
        .unwrap_err();
        assert_eq!(err, RosterError::IdSpaceExhausted);
    }

    #[test]
    fn test_add_stops_when_ids_run_out() {
        let mut roster = Roster::with_characters([Character {
            id: CharacterId(u32::MAX - 1),
            name: "Sam".to_string(),
            class: "Ladino".to_string(),
            level: 2,
            recruited: false,
        }])
        .unwrap();
        assert_eq!(roster.next_id(), CharacterId(u32::MAX));

        let err = roster.add("Rosie", "Ladino", "3").unwrap_err();
        assert_eq!(err, RosterError::IdSpaceExhausted);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.next_id(), CharacterId(u32::MAX));
        assert_eq!(last_kind(&roster), Some(NotificationKind::Error));

        // Still exhausted; nothing wraps around to a used id
        assert!(roster.add("Rosie", "Ladino", "3").is_err());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_filter_parse_and_cycle() {
        assert_eq!("Recruited".parse::<Filter>().unwrap(), Filter::Recruited);
        assert!("everyone".parse::<Filter>().is_err());

        for filter in Filter::ALL {
            assert_eq!(filter.next().prev(), filter);
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_character_serializes_flat() {
        let roster = Roster::sample();
        let json = serde_json::to_value(roster.get(CharacterId(2)).unwrap()).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["class"], "Mago");
        assert_eq!(json["recruited"], true);
    }
}
