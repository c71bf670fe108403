#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use super::target::{GalleryItem, RenderTarget};
use crate::net::types::CardRecord;

pub const EMPTY_CATEGORY_MESSAGE: &str = "No cards available in this category.";
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load card data.";

pub const YEAR_LABEL: &str = "Year:";
pub const CONDITION_LABEL: &str = "Condition:";
pub const MARKET_VALUE_LABEL: &str = "Market Value:";

/// Display model of a single card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub image_src: String,
    /// Player and year joined by a space; empty when both are absent.
    pub image_alt: String,
    /// `None` when the record has none of the optional fields.
    pub details: Option<CardDetails>,
}

/// The text block under the card image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDetails {
    /// Player name, shown as a heading without a label.
    pub heading: Option<String>,
    pub lines: Vec<DetailLine>,
}

/// A labelled detail line, e.g. `Year: 1989`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

impl CardView {
    #[must_use]
    pub fn from_record(record: &CardRecord) -> Self {
        let player = record.player();
        let year = record.year();

        let image_alt = [player, year.as_deref()].into_iter().flatten().collect::<Vec<_>>().join(" ");

        let lines: Vec<DetailLine> = [
            (YEAR_LABEL, year),
            (CONDITION_LABEL, record.condition().map(str::to_owned)),
            (MARKET_VALUE_LABEL, record.market_value().map(str::to_owned)),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| DetailLine { label, value }))
        .collect();

        let details = if player.is_none() && lines.is_empty() {
            None
        } else {
            Some(CardDetails { heading: player.map(str::to_owned), lines })
        };

        Self { image_src: record.image_path.clone(), image_alt, details }
    }
}

/// Records visible under `category`, in input order.
///
/// `home` selects everything; any other key is an exact, case-sensitive
/// match against `CardRecord::category`.
#[must_use]
pub fn filter_cards<'a>(records: &'a [CardRecord], category: &str, home: &str) -> Vec<&'a CardRecord> {
    if category == home {
        return records.iter().collect();
    }
    records.iter().filter(|card| card.category == category).collect()
}

/// Clear `target` and fill it with the cards for `category`, or with the
/// empty-category message when nothing matches.
pub fn display_cards<T: RenderTarget + ?Sized>(target: &mut T, records: &[CardRecord], category: &str, home: &str) {
    target.clear();

    let filtered = filter_cards(records, category, home);
    if filtered.is_empty() {
        target.append(GalleryItem::Message(EMPTY_CATEGORY_MESSAGE.to_owned()));
        return;
    }

    for record in filtered {
        target.append(GalleryItem::Card(CardView::from_record(record)));
    }
}

/// Replace the contents of `target` with the load failure message.
pub fn display_load_error<T: RenderTarget + ?Sized>(target: &mut T) {
    target.clear();
    target.append(GalleryItem::Message(LOAD_ERROR_MESSAGE.to_owned()));
}
