//! Question provider contract and an in-memory question bank.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which prompts fill the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySelection {
    /// Every category combined.
    #[default]
    All,
    /// A single category by key.
    Key(String),
}

impl CategorySelection {
    /// Select one category by key.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        CategorySelection::Key(key.into())
    }
}

/// A titled group of prompts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub title: String,
    pub questions: Vec<String>,
}

/// Supplies prompt text to the game.
///
/// The engine only needs the category list (for the setup screen) and the
/// prompts for a selection; where they come from is up to the host.
pub trait QuestionProvider {
    /// `(key, title)` for every category, in display order.
    fn categories(&self) -> Vec<(String, String)>;

    /// Prompts for a selection. An unknown key behaves like `All`.
    fn prompts(&self, selection: &CategorySelection) -> Vec<String>;
}

/// Categories held in memory, in insertion order.
///
/// Deserializes from a JSON list of categories:
///
/// ```
/// use ladder_party::questions::{CategorySelection, QuestionBank, QuestionProvider};
///
/// let bank: QuestionBank = serde_json::from_str(
///     r#"[{"key":"food","title":"Food","questions":["Is it sweet?"]}]"#,
/// ).unwrap();
/// assert_eq!(bank.prompts(&CategorySelection::key("food")), vec!["Is it sweet?"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct QuestionBank {
    categories: Vec<Category>,
    index: FxHashMap<String, usize>,
}

impl QuestionBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, replacing any existing one with the same key.
    pub fn add_category(
        &mut self,
        key: impl Into<String>,
        title: impl Into<String>,
        questions: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        let category = Category {
            key: key.into(),
            title: title.into(),
            questions: questions.into_iter().map(Into::into).collect(),
        };
        self.insert(category);
        self
    }

    fn insert(&mut self, category: Category) {
        match self.index.get(&category.key) {
            Some(&pos) => self.categories[pos] = category,
            None => {
                self.index.insert(category.key.clone(), self.categories.len());
                self.categories.push(category);
            }
        }
    }

    /// Look up a category by key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.index.get(key).map(|&pos| &self.categories[pos])
    }

    /// Total prompts across all categories.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    fn all_prompts(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter().cloned())
            .collect()
    }
}

impl QuestionProvider for QuestionBank {
    fn categories(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .map(|c| (c.key.clone(), c.title.clone()))
            .collect()
    }

    fn prompts(&self, selection: &CategorySelection) -> Vec<String> {
        match selection {
            CategorySelection::All => self.all_prompts(),
            CategorySelection::Key(key) => match self.category(key) {
                Some(category) => category.questions.clone(),
                None => {
                    warn!(%key, "unknown question category, using all categories");
                    self.all_prompts()
                }
            },
        }
    }
}

impl From<Vec<Category>> for QuestionBank {
    fn from(categories: Vec<Category>) -> Self {
        let mut bank = Self::new();
        for category in categories {
            bank.insert(category);
        }
        bank
    }
}

impl From<QuestionBank> for Vec<Category> {
    fn from(bank: QuestionBank) -> Self {
        bank.categories
    }
}
