use crate::game::card::Card;
use crate::game::deck::DeckSize;

/// Directory below the media root that holds the card faces.
pub const DEFAULT_THEME: &str = "img_cards";

const SUITS: &[(&str, &str)] = &[
    ("club", "Clubs"),
    ("diamond", "Diamonds"),
    ("heart", "Hearts"),
    ("spade", "Spades"),
];

/// Ranks of the standard deck, keyed by the number used in the image file names
const FULL_RANKS: &[(u8, &str)] = &[
    (1, "Ace"),
    (2, "Two"),
    (3, "Three"),
    (4, "Four"),
    (5, "Five"),
    (6, "Six"),
    (7, "Seven"),
    (8, "Eight"),
    (9, "Nine"),
    (10, "Ten"),
    (11, "Jack"),
    (12, "Queen"),
    (13, "King"),
];

/// Six through King, Ace high
const SHORT_RANKS: &[(u8, &str)] = &[
    (6, "Six"),
    (7, "Seven"),
    (8, "Eight"),
    (9, "Nine"),
    (10, "Ten"),
    (11, "Jack"),
    (12, "Queen"),
    (13, "King"),
    (1, "Ace"),
];

fn ranks(size: DeckSize) -> &'static [(u8, &'static str)] {
    match size {
        DeckSize::Short36 => SHORT_RANKS,
        DeckSize::Full52 => FULL_RANKS,
    }
}

/// Build the ordered card list for a deck size, grouped by suit.
pub fn create_cards(size: DeckSize) -> Vec<Card> {
    let ranks = ranks(size);
    let cards: Vec<Card> = SUITS
        .iter()
        .flat_map(|&(suit_file, suit_name)| {
            ranks.iter().map(move |&(rank_file, rank_name)| {
                Card::new(
                    format!("{rank_name} of {suit_name}"),
                    format!("{DEFAULT_THEME}/{rank_file}_{suit_file}.png"),
                )
            })
        })
        .collect();
    tracing::debug!(size = size.count(), "created {} card records", cards.len());
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_sizes_match_tables() {
        assert_eq!(create_cards(DeckSize::Short36).len(), 36);
        assert_eq!(create_cards(DeckSize::Full52).len(), 52);
    }

    #[test]
    fn test_names_and_images_are_unique() {
        for size in [DeckSize::Short36, DeckSize::Full52] {
            let cards = create_cards(size);
            let names: HashSet<_> = cards.iter().map(|c| c.name.as_str()).collect();
            let images: HashSet<_> = cards.iter().map(|c| c.image.as_str()).collect();
            assert_eq!(names.len(), cards.len());
            assert_eq!(images.len(), cards.len());
        }
    }

    #[test]
    fn test_image_file_naming() {
        let cards = create_cards(DeckSize::Full52);
        assert_eq!(cards[0].name, "Ace of Clubs");
        assert_eq!(cards[0].image, "img_cards/1_club.png");
        let king = cards
            .iter()
            .find(|c| c.name == "King of Spades")
            .expect("standard deck has a King of Spades");
        assert_eq!(king.image, "img_cards/13_spade.png");
    }

    #[test]
    fn test_short_deck_has_no_low_ranks() {
        let cards = create_cards(DeckSize::Short36);
        assert!(cards.iter().all(|c| !c.name.starts_with("Two")));
        assert!(cards.iter().all(|c| !c.name.starts_with("Five")));
        assert!(cards.iter().any(|c| c.name == "Ace of Hearts"));
    }
}
