//! The alert log format, shared by the writer and the reader.
//!
//! The engine appends alerts to a plain-text log, and the viewer
//! reconstructs records by re-parsing that text. That makes the text block
//! a de facto schema: the opening marker line and the exact field labels
//! are load-bearing. This crate pins the format in one place:
//!
//! - [`record`] — the structured [`AlertRecord`](record::AlertRecord) used
//!   internally; the text form is only an output adapter.
//! - [`render`] — record → text block.
//! - [`parse`] — text → records, the single reverse-parsing adapter.

pub mod parse;
pub mod record;
pub mod render;

pub use parse::parse_alerts;
pub use record::{AlertKind, AlertRecord, TpHitEvent};
pub use render::{render_alert, render_tp_hit};
