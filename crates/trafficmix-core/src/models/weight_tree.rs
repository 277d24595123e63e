//! Two-level weight hierarchy: categories of applications, each application
//! carrying an integer weight.
//!
//! # Examples
//!
//! ```
//! use trafficmix_core::models::{Category, WeightItem, WeightTree};
//!
//! let tree = WeightTree::new(vec![
//!     Category::with_items("web", vec![WeightItem::new("a.com", 300), WeightItem::new("b.com", 100)]),
//!     Category::with_items("voice", vec![WeightItem::new("sip.net", 600)]),
//! ]);
//! assert_eq!(tree.total(), 1000);
//! assert_eq!(tree.category_percent("voice"), Some(60.0));
//! assert_eq!(tree.item_percent("web", "a.com"), Some(75.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_SCALE;
use crate::errors::MixResult;

/// One application's share of generated traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightItem {
    /// Application identifier (its domain).
    pub id: String,
    pub weight: u64,
    /// Target endpoint, carried through untouched for the config store.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
}

impl WeightItem {
    pub fn new(id: impl Into<String>, weight: u64) -> Self {
        Self {
            id: id.into(),
            weight,
            endpoint: String::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// A named group of applications sharing one redistribution pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<WeightItem>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<WeightItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Sum of the item weights. Summed in `u128` so any set of `u64`
    /// weights adds up without overflow.
    pub fn total(&self) -> u128 {
        self.items.iter().map(|i| u128::from(i.weight)).sum()
    }

    pub fn find(&self, item_id: &str) -> Option<&WeightItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The full category → application hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTree {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl WeightTree {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Sum of every item weight in the tree.
    pub fn total(&self) -> u128 {
        self.categories.iter().map(Category::total).sum()
    }

    /// Iterate over every item, category by category, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &WeightItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut WeightItem> {
        self.categories.iter_mut().flat_map(|c| c.items.iter_mut())
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    pub fn category_total(&self, name: &str) -> Option<u128> {
        self.category(name).map(Category::total)
    }

    /// Share of the whole tree held by `name`, in percent.
    pub fn category_percent(&self, name: &str) -> Option<f64> {
        let category = self.category(name)?;
        Some(percent(category.total(), self.total()))
    }

    /// Share of its own category held by `item_id`, in percent.
    pub fn item_percent(&self, category: &str, item_id: &str) -> Option<f64> {
        let category = self.category(category)?;
        let item = category.find(item_id)?;
        Some(percent(u128::from(item.weight), category.total()))
    }

    /// Locate an item anywhere in the tree by id.
    pub fn find_item(&self, item_id: &str) -> Option<(&Category, &WeightItem)> {
        self.categories
            .iter()
            .find_map(|c| c.find(item_id).map(|item| (c, item)))
    }

    /// Weighted selection: `roll` in `[0, 1)` is mapped onto the cumulative
    /// weights. Zero-weight items are never picked; an empty or all-zero tree
    /// yields `None`.
    pub fn pick(&self, roll: f64) -> Option<&WeightItem> {
        let total = self.total();
        if total == 0 || !roll.is_finite() {
            return None;
        }
        let point = ((roll.clamp(0.0, 1.0) * total as f64) as u128).min(total - 1);
        let mut upto = 0u128;
        for item in self.items() {
            upto += u128::from(item.weight);
            if point < upto {
                return Some(item);
            }
        }
        None
    }

    pub fn from_json(json: &str) -> MixResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> MixResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn percent(part: u128, whole: u128) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * PERCENT_SCALE
}
