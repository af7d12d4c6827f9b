//! Voice command source for the Vitrine launcher.
//!
//! The recognition transport is external: it delivers lower-level events
//! (transcripts, errors, session ends) as discrete callbacks. This crate
//! owns what happens next — mapping utterances to directional commands via
//! a keyword lexicon, and the listening state machine with its
//! transient/terminal error recovery.

pub mod lexicon;
pub mod listener;

pub use lexicon::Lexicon;
pub use listener::{Recovery, TransportError, VoiceListener};
