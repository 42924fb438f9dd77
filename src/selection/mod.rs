//! Picking the day's new words
//!
//! Selection is a pure function of the corpus, the learner's seen set, the
//! requested count and a caller-supplied random source. Nothing here reads
//! or writes progress; callers merge the returned batch themselves.

pub mod seen;
pub mod selector;

pub use seen::SeenSet;
pub use selector::{select, SelectionError, WordSelector};
