//! Cards handed to a renderer: one filter card for a category, one item
//! card per member and one query card per extra item to test against it.
//!
//! Nothing here knows about geometry. A card is a label plus the grid cells
//! to fill; laying the cards out and extruding them is the renderer's job.
use crate::bloom::{
    BloomFilter, BloomFilterConfig, BloomFilterOps, BloomFilterStats,
};
use crate::error::Result;
use crate::grid::{ActiveCells, GridCoordinate};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// One item per line; lines are trimmed and blank ones skipped.
    pub fn parse(name: impl Into<String>, text: &str) -> Self {
        let items = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn crops() -> Self {
        Self::new("Crops", ["Oats", "Peas", "Beans", "Barley"])
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::new("Fruit", ["Tomato", "Apple", "Banana", "Pear", "Cucumber"])
    }
}

#[derive(Clone, Debug, Default, Builder)]
#[builder(pattern = "owned")]
pub struct PlanConfig {
    #[builder(default)]
    pub filter: BloomFilterConfig,

    /// Only draw item cards for the first N items; `None` draws them all.
    #[builder(default = "None")]
    pub max_item_cards: Option<usize>,

    /// Items that are checked against the filter but never inserted.
    #[builder(default, setter(into))]
    pub queries: Vec<String>,
}

impl PlanConfig {
    pub fn validate(&self) -> Result<()> {
        self.filter.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Filter,
    Item,
    Query,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub label: String,
    pub kind: CardKind,
    /// Filled cells in column-major order.
    pub cells: Vec<GridCoordinate>,
    /// Whether the filter answers "maybe present" for this card's item.
    /// `None` on the filter card. For a query card `Some(true)` is a
    /// false positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_filter: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPlan {
    pub name: String,
    pub num_hashes: usize,
    pub fill_ratio: f64,
    pub filter_card: Card,
    pub item_cards: Vec<Card>,
    #[serde(default)]
    pub query_cards: Vec<Card>,
}

impl CategoryPlan {
    pub fn build(category: &Category, config: &PlanConfig) -> Result<Self> {
        config.validate()?;

        let filter =
            BloomFilter::from_items(config.filter.clone(), &category.items)?;

        let filter_card = Card {
            label: category.name.clone(),
            kind: CardKind::Filter,
            cells: filter.active_coordinates(),
            in_filter: None,
        };

        let limit = config.max_item_cards.unwrap_or(category.items.len());
        let item_cards = category
            .items
            .iter()
            .take(limit)
            .map(|item| item_card(&filter, item, CardKind::Item))
            .collect::<Result<Vec<_>>>()?;

        let query_cards = config
            .queries
            .iter()
            .map(|query| item_card(&filter, query, CardKind::Query))
            .collect::<Result<Vec<_>>>()?;

        info!(
            category = %category.name,
            items = category.items.len(),
            item_cards = item_cards.len(),
            query_cards = query_cards.len(),
            active_cells = filter.active_cells(),
            "built category plan"
        );

        Ok(Self {
            name: category.name.clone(),
            num_hashes: filter.num_hashes(),
            fill_ratio: filter.fill_ratio(),
            filter_card,
            item_cards,
            query_cards,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn item_card(filter: &BloomFilter, item: &str, kind: CardKind) -> Result<Card> {
    // A fresh one-item filter, so no state leaks between cards.
    let single = BloomFilter::from_items(filter.config().clone(), [item])?;
    let in_filter = filter.contains(item)?;
    debug!(item, ?kind, cells = single.active_cells(), in_filter, "built card");
    Ok(Card {
        label: item.to_string(),
        kind,
        cells: single.active_coordinates(),
        in_filter: Some(in_filter),
    })
}
