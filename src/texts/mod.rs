use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::error::Error;
use std::fmt;

static TEXTS_DIR: Dir = include_dir!("src/texts");

/// Which sample pool `new text` draws from. `Test` is a tiny pool of short
/// prompts useful for quick smoke runs.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Test,
}

impl Difficulty {
    /// Next difficulty in the settings cycle.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Test,
            Difficulty::Test => Difficulty::Easy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    PoolNotFound(String),
    Malformed(String),
    EmptyPool(String),
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::PoolNotFound(name) => write!(f, "text pool '{name}' not found"),
            TextError::Malformed(name) => write!(f, "text pool '{name}' is not valid json"),
            TextError::EmptyPool(name) => {
                write!(f, "text pool '{name}' contains no texts")
            }
        }
    }
}

impl Error for TextError {}

/// A difficulty-keyed pool of reference texts, embedded in the binary.
#[derive(Deserialize, Clone, Debug)]
pub struct TextPool {
    pub name: String,
    pub size: u32,
    pub texts: Vec<String>,
}

impl TextPool {
    pub fn load(difficulty: Difficulty) -> Result<Self, TextError> {
        let name = difficulty.to_string();
        let file_name = format!("{name}.json");

        let file = TEXTS_DIR
            .get_file(&file_name)
            .ok_or_else(|| TextError::PoolNotFound(name.clone()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| TextError::Malformed(name.clone()))?;
        let pool: TextPool =
            from_str(contents).map_err(|_| TextError::Malformed(name.clone()))?;

        if pool.texts.is_empty() {
            return Err(TextError::EmptyPool(name));
        }
        Ok(pool)
    }

    /// Draws a text uniformly at random, re-rolling while the draw matches
    /// the immediately preceding text (only possible to avoid when the pool
    /// has more than one entry).
    pub fn pick(&self, previous: Option<&str>) -> Result<String, TextError> {
        if self.texts.is_empty() {
            return Err(TextError::EmptyPool(self.name.clone()));
        }

        let mut rng = rand::thread_rng();
        let mut choice = &self.texts[rng.gen_range(0..self.texts.len())];
        if self.texts.len() > 1 {
            while previous == Some(choice.as_str()) {
                choice = &self.texts[rng.gen_range(0..self.texts.len())];
            }
        }
        Ok(choice.clone())
    }
}
