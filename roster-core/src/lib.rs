//! In-memory guild roster engine.
//!
//! This crate provides:
//! - The [`Roster`] store with validated add / recruit / remove and filtered views
//! - Transient notifications for UI feedback
//! - A small text command language and a headless driver built on it
//!
//! # Quick Start
//!
//! ```
//! use roster_core::{Filter, Roster};
//!
//! let mut roster = Roster::new();
//! let gandalf = roster.add("Gandalf", "Mago", "50")?;
//! roster.recruit(gandalf)?;
//!
//! assert_eq!(roster.filtered(Filter::Recruited).count(), 1);
//! assert_eq!(<(usize, usize)>::from(roster.counts()), (1, 1));
//! # Ok::<(), roster_core::RosterError>(())
//! ```

pub mod command;
pub mod config;
pub mod headless;
pub mod notify;
pub mod roster;
pub mod testing;

// Primary public API
pub use command::{Command, CommandError};
pub use config::{ConfigError, RosterConfig, Seed};
pub use headless::HeadlessSession;
pub use notify::{Notification, NotificationKind, NotificationQueue};
pub use roster::{
    validate, Character, CharacterId, Draft, Field, Filter, RecruitOutcome, Roster, RosterCounts,
    RosterError, ValidationError, LEVEL_MAX, LEVEL_MIN, SUGGESTED_CLASSES,
};
pub use testing::TestHarness;
