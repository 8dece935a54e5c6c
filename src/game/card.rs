use egui::{Image, Vec2};
use serde::{Deserialize, Serialize};

/// Natural size of the card faces shipped in `media/img_cards`
pub const CARD_NATURAL_SIZE: Vec2 = Vec2::new(140.0, 190.0);

/// A single card record: a display name and the image it is drawn with.
///
/// The image is a path relative to the media root, so the same deck works for
/// the browser (served next to the page) and the native launcher (`file://`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub image: String,
}

impl Card {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// URI handed to the egui image loaders.
    pub fn image_uri(&self, media_root: &str) -> String {
        format!(
            "{root}/{image}",
            root = media_root.trim_end_matches('/'),
            image = self.image
        )
    }

    pub fn img(&self, media_root: &str) -> Image<'static> {
        Image::new(self.image_uri(media_root))
            .show_loading_spinner(true)
            .maintain_aspect_ratio(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_uri_joins_media_root() {
        let card = Card::new("Ace of Spades", "img_cards/1_spade.png");
        assert_eq!(card.image_uri("media"), "media/img_cards/1_spade.png");
        assert_eq!(
            card.image_uri("file:///srv/media/"),
            "file:///srv/media/img_cards/1_spade.png"
        );
    }
}
