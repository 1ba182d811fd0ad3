use crate::stats;
use crate::TICK_RATE_MS;
use std::error::Error;
use std::fmt;

/// Lifecycle of a typing session.
///
/// `Waiting` and `Playing` accept keystrokes; `Paused` and `Completed`
/// silently ignore them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Playing,
    Paused,
    Completed,
}

/// A keystroke as seen by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyPrompt,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyPrompt => {
                write!(f, "reference text must contain at least one character")
            }
        }
    }
}

impl Error for SessionError {}

/// Read-only projection of a session for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub status: Status,
    pub typed: String,
    pub elapsed_secs: f64,
    pub errors: usize,
    pub wpm: u32,
    pub accuracy: u32,
    pub cursor: usize,
    pub target_len: usize,
}

/// A single typing session against one reference text.
///
/// The engine owns all mutable session state and is driven by two event
/// sources only: keystrokes and timer ticks. The cursor is always at
/// `typed.len()`.
#[derive(Debug, Clone)]
pub struct Session {
    pub prompt: String,
    target: Vec<char>,
    typed: Vec<char>,
    elapsed_secs: f64,
    error_count: usize,
    status: Status,
    pub backspace_enabled: bool,
}

impl Session {
    pub fn new(prompt: String, backspace_enabled: bool) -> Result<Self, SessionError> {
        let target: Vec<char> = prompt.chars().collect();
        if target.is_empty() {
            return Err(SessionError::EmptyPrompt);
        }

        Ok(Self {
            prompt,
            target,
            typed: vec![],
            elapsed_secs: 0.0,
            error_count: 0,
            status: Status::Waiting,
            backspace_enabled,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn cursor_pos(&self) -> usize {
        self.typed.len()
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn expected_char(&self, idx: usize) -> Option<char> {
        self.target.get(idx).copied()
    }

    pub fn has_finished(&self) -> bool {
        self.status == Status::Completed
    }

    /// Applies a keystroke. Invalid keystrokes (while paused or completed,
    /// typing past the end, backspace while disabled or at the start) are
    /// silent no-ops.
    pub fn apply_key(&mut self, key: Key) {
        if !matches!(self.status, Status::Waiting | Status::Playing) {
            return;
        }

        let accepted = match key {
            Key::Char(c) => self.write(c),
            Key::Backspace => self.backspace(),
        };

        if !accepted {
            return;
        }

        self.recount_errors();

        if self.status == Status::Waiting {
            self.status = Status::Playing;
        }

        if self.typed.len() == self.target.len() {
            self.status = Status::Completed;
        }
    }

    fn write(&mut self, c: char) -> bool {
        if c.is_control() || self.typed.len() == self.target.len() {
            return false;
        }
        self.typed.push(c);
        true
    }

    fn backspace(&mut self) -> bool {
        if !self.backspace_enabled || self.typed.is_empty() {
            return false;
        }
        self.typed.pop();
        true
    }

    // Errors are fully recounted after every accepted keystroke, never
    // tracked incrementally.
    fn recount_errors(&mut self) {
        self.error_count = self
            .typed
            .iter()
            .zip(self.target.iter())
            .filter(|(typed, expected)| typed != expected)
            .count();
    }

    pub fn pause(&mut self) {
        if self.status == Status::Playing {
            self.status = Status::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            self.status = Status::Playing;
        }
    }

    /// Returns the session to a fresh `Waiting` state on the same text.
    pub fn reset(&mut self) {
        self.typed.clear();
        self.elapsed_secs = 0.0;
        self.error_count = 0;
        self.status = Status::Waiting;
    }

    /// Advances the clock by one tick. Time accumulates only while playing,
    /// so repeated pause/resume cycles cannot drift.
    pub fn on_tick(&mut self) {
        if self.status == Status::Playing {
            self.elapsed_secs += TICK_RATE_MS as f64 / 1000.0;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let typed: String = self.typed.iter().collect();
        let words = stats::words_typed(&typed);

        Snapshot {
            status: self.status,
            wpm: stats::wpm(words, self.elapsed_secs),
            accuracy: stats::accuracy(self.typed.len(), self.error_count),
            typed,
            elapsed_secs: self.elapsed_secs,
            errors: self.error_count,
            cursor: self.typed.len(),
            target_len: self.target.len(),
        }
    }
}
