//! Fixtures
//!
//! Boards described in YAML: board config, tag toggles and cards in document order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    board::{Board, BoardObserver},
    config::{BoardConfig, ConfigError},
    controls::{TagToggle, TagToggleConfig},
    items::Item,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// Path that could not be read
        path: PathBuf,

        /// The underlying IO error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid board config
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A card without a title
    #[error("Card {0} has an empty title")]
    EmptyTitle(usize),
}

/// Card Fixture
#[derive(Debug, Clone, Deserialize)]
pub struct CardFixture {
    /// Card title
    pub title: String,

    /// Comma-separated tags (e.g., "image, portrait")
    #[serde(default)]
    pub tags: String,
}

/// Fixture
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    /// Board config
    #[serde(default)]
    pub config: BoardConfig,

    /// Tag toggles, in display order
    #[serde(default)]
    pub tags: Vec<TagToggleConfig>,

    /// Cards, in document order
    #[serde(default)]
    pub cards: Vec<CardFixture>,
}

impl Fixture {
    /// Parse a fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, the config is invalid, or a
    /// card has an empty title.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_norway::from_str(yaml)?;

        fixture.config.validate()?;

        if let Some(index) = fixture
            .cards
            .iter()
            .position(|card| card.title.trim().is_empty())
        {
            return Err(FixtureError::EmptyTitle(index));
        }

        Ok(fixture)
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid fixture.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&contents)
    }

    /// Load the named fixture set from `./fixtures/boards/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture set cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load the named fixture set from `<base_path>/boards/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture set cannot be loaded.
    pub fn from_set_in(base_path: impl AsRef<Path>, name: &str) -> Result<Self, FixtureError> {
        Self::from_path(base_path.as_ref().join("boards").join(format!("{name}.yml")))
    }

    /// Build a board without an observer.
    pub fn into_board(self) -> Board {
        let mut board = Board::new(self.config);

        self.populate(&mut board);

        board
    }

    /// Build a board that reports changes to `observer`.
    pub fn into_board_with_observer<O: BoardObserver>(self, observer: O) -> Board<O> {
        let mut board = Board::with_observer(self.config, observer);

        self.populate(&mut board);

        board
    }

    fn populate<O: BoardObserver>(self, board: &mut Board<O>) {
        for toggle in self.tags {
            board.add_toggle(TagToggle::from(toggle));
        }

        for card in self.cards {
            board.register_item(Item::new(card.title, card.tags));
        }
    }
}
