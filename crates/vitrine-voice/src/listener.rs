//! Listening state machine.
//!
//! The external recognizer reports transcripts, errors, and session ends.
//! Transient errors (no signal, capture hiccup) keep the listening flag
//! set and ask the transport to restart after a fixed delay; anything else
//! disables listening until the user re-engages. A session that ends while
//! the flag is still set is restarted immediately.

use std::time::Duration;

use vitrine_types::Direction;

use crate::lexicon::Lexicon;

/// Delay before restarting after a transient error.
pub const RESTART_DELAY: Duration = Duration::from_secs(1);

/// Errors the recognition transport can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Nothing was heard during the session.
    NoSpeech,
    /// The audio device failed to capture.
    AudioCapture,
    /// Microphone permission denied.
    NotAllowed,
    /// Recognition service unreachable.
    Network,
    /// Anything else the transport reports.
    Other,
}

impl TransportError {
    /// Transient errors are retried; the rest are terminal.
    pub fn is_transient(self) -> bool {
        matches!(self, TransportError::NoSpeech | TransportError::AudioCapture)
    }
}

/// What the transport should do after an error or session end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Start a new session after the given delay; listening stays on.
    RestartAfter(Duration),
    /// Start a new session now.
    RestartNow,
    /// Stay stopped; listening has been disabled.
    Stop,
}

/// Voice listener state, owned by the shell's event loop.
#[derive(Debug, Clone)]
pub struct VoiceListener {
    lexicon: Lexicon,
    listening: bool,
    last_transcript: Option<String>,
}

impl VoiceListener {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            listening: false,
            last_transcript: None,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Most recent transcript, for status display.
    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// Toggle listening. Turning it off stops any in-flight session; no
    /// final partial result is guaranteed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.listening = !self.listening;
        if self.listening {
            log::info!("Voice recognition enabled");
        } else {
            log::info!("Voice recognition disabled");
        }
        self.listening
    }

    /// Map a recognized utterance to zero or one directional command.
    /// Ignored entirely while not listening.
    pub fn on_transcript(&mut self, transcript: &str) -> Option<Direction> {
        if !self.listening {
            return None;
        }
        let command = self.lexicon.parse(transcript);
        log::debug!("Voice transcript {transcript:?} -> {command:?}");
        self.last_transcript = Some(transcript.trim().to_lowercase());
        command
    }

    /// Classify a transport error and decide recovery.
    pub fn on_error(&mut self, error: TransportError) -> Recovery {
        if !self.listening {
            return Recovery::Stop;
        }
        if error.is_transient() {
            log::warn!("Transient recognition error ({error:?}), restarting");
            Recovery::RestartAfter(RESTART_DELAY)
        } else {
            log::warn!("Recognition error ({error:?}), disabling listening");
            self.listening = false;
            Recovery::Stop
        }
    }

    /// The transport's session ended on its own. While the listening flag
    /// is set the session is restarted immediately.
    pub fn on_session_end(&self) -> Recovery {
        if self.listening {
            Recovery::RestartNow
        } else {
            Recovery::Stop
        }
    }
}

impl Default for VoiceListener {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}
