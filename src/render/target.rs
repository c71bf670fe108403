use super::cards::CardView;

/// One child of the card display container.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryItem {
    /// A plain-text paragraph (empty category, load failure).
    Message(String),
    /// A rendered card.
    Card(CardView),
}

/// A container that can be emptied and refilled in order.
pub trait RenderTarget {
    fn clear(&mut self);
    fn append(&mut self, item: GalleryItem);
}

impl RenderTarget for Vec<GalleryItem> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, item: GalleryItem) {
        self.push(item);
    }
}
