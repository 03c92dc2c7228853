// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One menu item as persisted in `menu.json`.
///
/// Every field defaults so records with missing keys pass through load
/// untouched. There is no schema enforcement on the file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Dish {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub calories: i64,
    #[serde(default)]
    pub image: String,
}

/// Raw add-dish submission. All fields arrive as strings; coercion rules
/// live in `add_dish`.
#[derive(Debug, Default, Clone)]
pub struct NewDish {
    pub name: String,
    pub price: String,
    pub category: String,
    pub calories: String,
    pub image: String,
}

/// Partial update for an existing dish. `None` or empty means "leave the
/// stored value alone".
#[derive(Debug, Default, Clone)]
pub struct DishPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub calories: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Dish),
    Rejected(AddRejection),
}

/// Why an add submission was discarded. The HTTP layer still degrades all
/// of these to a plain redirect; the distinction exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRejection {
    MissingName,
    MissingPrice,
    MissingCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(Dish),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("menu file i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("menu encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store for the menu collection.
///
/// The file is the sole source of truth: every operation re-reads it,
/// mutates in memory and writes the whole collection back. Callers that
/// need read-modify-write atomicity across a request hold the shared lock
/// in `server::AppState` around the call.
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A missing file or unparseable contents
    /// yield an empty collection rather than an error.
    pub fn load(&self) -> Vec<Dish> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(menu) => menu,
            Err(e) => {
                tracing::debug!("menu file at {:?} is not valid JSON ({}), treating as empty", self.path, e);
                Vec::new()
            }
        }
    }

    /// Writes the full collection, pretty-printed, overwriting the file.
    /// Creates the parent directory on first save.
    pub fn save(&self, menu: &[Dish]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(menu)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn list(&self) -> Vec<Dish> {
        self.load()
    }

    /// Collection ordered by `(category, name)` for dashboard display.
    /// The sort order is never persisted.
    pub fn list_sorted(&self) -> Vec<Dish> {
        let mut menu = self.load();
        menu.sort_by(|a, b| {
            (a.category.as_str(), a.name.as_str()).cmp(&(b.category.as_str(), b.name.as_str()))
        });
        menu
    }

    /// Validates and appends a new dish. `name`, `price` and `category`
    /// must be non-empty after trimming; numeric fields coerce to 0 when
    /// they fail to parse. Ids are `max(existing) + 1`, never reused.
    pub fn add_dish(&self, new: NewDish) -> Result<AddOutcome, StoreError> {
        let name = new.name.trim();
        let price = new.price.trim();
        let category = new.category.trim();

        if name.is_empty() {
            return Ok(AddOutcome::Rejected(AddRejection::MissingName));
        }
        if price.is_empty() {
            return Ok(AddOutcome::Rejected(AddRejection::MissingPrice));
        }
        if category.is_empty() {
            return Ok(AddOutcome::Rejected(AddRejection::MissingCategory));
        }

        let mut menu = self.load();
        let dish = Dish {
            id: next_id(&menu),
            name: name.to_string(),
            category: category.to_string(),
            price: parse_amount(price),
            calories: parse_amount(new.calories.trim()),
            image: new.image.trim().to_string(),
        };
        menu.push(dish.clone());
        self.save(&menu)?;
        Ok(AddOutcome::Added(dish))
    }

    /// Applies a partial update to the dish with the given id. Fields that
    /// are absent or empty keep their stored value, as do numeric fields
    /// that fail to parse. An unknown id is a no-op that still persists
    /// the (unchanged) collection.
    pub fn edit_dish(&self, id: u64, patch: DishPatch) -> Result<EditOutcome, StoreError> {
        let mut menu = self.load();
        let outcome = match menu.iter_mut().find(|d| d.id == id) {
            Some(dish) => {
                if let Some(name) = nonempty(patch.name) {
                    dish.name = name;
                }
                if let Some(category) = nonempty(patch.category) {
                    dish.category = category;
                }
                if let Some(price) = nonempty(patch.price) {
                    if let Ok(v) = price.parse::<i64>() {
                        dish.price = v;
                    }
                }
                if let Some(calories) = nonempty(patch.calories) {
                    if let Ok(v) = calories.parse::<i64>() {
                        dish.calories = v;
                    }
                }
                if let Some(image) = nonempty(patch.image) {
                    dish.image = image;
                }
                EditOutcome::Updated(dish.clone())
            }
            None => EditOutcome::NotFound,
        };
        self.save(&menu)?;
        Ok(outcome)
    }

    /// Removes the dish with the given id and persists the filtered
    /// collection. Unknown ids are silent no-ops.
    pub fn delete_dish(&self, id: u64) -> Result<DeleteOutcome, StoreError> {
        let mut menu = self.load();
        let before = menu.len();
        menu.retain(|d| d.id != id);
        let outcome = if menu.len() < before {
            DeleteOutcome::Removed
        } else {
            DeleteOutcome::NotFound
        };
        self.save(&menu)?;
        Ok(outcome)
    }
}

fn next_id(menu: &[Dish]) -> u64 {
    menu.iter().map(|d| d.id).max().map_or(1, |max| max + 1)
}

fn parse_amount(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

fn nonempty(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
