//! Gallery model
//!
//! The ordered, read-only set of images the lightbox pages through.

use serde::{Deserialize, Serialize};

/// One image in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    src: String,
    caption: String,
}

impl GalleryItem {
    /// Create an item from its image source and caption (the alt text).
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }

    /// Image URL or path
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Caption shown under the image; doubles as alt text
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Direction of a lightbox step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Fixed, ordered sequence of gallery images.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    /// Index reached by stepping once from `from`, wrapping at both ends.
    ///
    /// Returns `None` for an empty gallery, where there is nothing to wrap to.
    pub fn step(&self, from: usize, step: Step) -> Option<usize> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        let from = from % n;
        Some(match step {
            Step::Next => (from + 1) % n,
            Step::Previous => (from + n - 1) % n,
        })
    }
}

impl FromIterator<GalleryItem> for Gallery {
    fn from_iter<I: IntoIterator<Item = GalleryItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        (0..n)
            .map(|i| GalleryItem::new(format!("img/{i}.jpg"), format!("Photo {i}")))
            .collect()
    }

    #[test]
    fn test_step_wraps_forward() {
        let g = gallery(3);
        assert_eq!(g.step(0, Step::Next), Some(1));
        assert_eq!(g.step(2, Step::Next), Some(0));
    }

    #[test]
    fn test_step_wraps_backward() {
        let g = gallery(3);
        assert_eq!(g.step(0, Step::Previous), Some(2));
        assert_eq!(g.step(1, Step::Previous), Some(0));
    }

    #[test]
    fn test_step_on_empty_gallery() {
        let g = Gallery::default();
        assert_eq!(g.step(0, Step::Next), None);
        assert_eq!(g.step(0, Step::Previous), None);
    }

    #[test]
    fn test_single_item_steps_to_itself() {
        let g = gallery(1);
        assert_eq!(g.step(0, Step::Next), Some(0));
        assert_eq!(g.step(0, Step::Previous), Some(0));
    }

    #[test]
    fn test_item_accessors() {
        let item = GalleryItem::new("a.png", "A sunset");
        assert_eq!(item.src(), "a.png");
        assert_eq!(item.caption(), "A sunset");
    }
}
