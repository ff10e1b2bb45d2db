//! Street View Roulette Engine
//!
//! Platform-agnostic core for the Street View Roulette tool: turns a pasted
//! list of panorama embeds into candidates, draws one at random with every
//! real name equally likely, hides it behind a deterministic fantasy name and
//! tracks reveals and revisits in a session history.
//! This crate provides all selection and state logic without UI or
//! platform-specific dependencies.

pub mod constants;
pub mod history;
pub mod location;
pub mod pseudonym;
pub mod selector;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use constants::{DEFAULT_LOCATION_NAME, EMBED_MARKER, UNNAMED_LOCATION_LABEL};
pub use history::{History, HistoryEntry};
pub use location::{Location, extract_embed_src, is_embed_url, parse_line, parse_locations};
pub use pseudonym::{pseudonym, pseudonym_indices, string_hash};
pub use selector::{LocationGroup, SelectionError, filter_available, group_by_name, select_location};
pub use session::{CurrentLocation, RevealOutcome, Session, SessionPhase};
pub use view::{HistoryRow, Placeholder, SessionView};
