//! Read-only views over the signal log.
//!
//! The viewer has no write access and no feedback into the engine: it
//! re-reads the log text on each refresh and tolerates a file that is
//! being appended to concurrently (it sees whatever is flushed so far; a
//! torn trailing block is dropped by the parser). Everything here is a
//! pure function from parsed records to display text, so it tests without
//! any I/O.

pub mod report;
