use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice::Iter;

use super::card::Card;
use crate::error::{GameError, Result};

/// The two fixed deck variants.
///
/// Serialized as the plain card count so configs read `deck_size = 36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum DeckSize {
    Short36,
    #[default]
    Full52,
}

impl DeckSize {
    pub const ALL: [DeckSize; 2] = [DeckSize::Short36, DeckSize::Full52];

    pub fn count(self) -> usize {
        match self {
            DeckSize::Short36 => 36,
            DeckSize::Full52 => 52,
        }
    }
}

impl fmt::Display for DeckSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cards", self.count())
    }
}

impl From<DeckSize> for usize {
    fn from(size: DeckSize) -> usize {
        size.count()
    }
}

impl TryFrom<usize> for DeckSize {
    type Error = GameError;

    fn try_from(count: usize) -> Result<Self> {
        match count {
            36 => Ok(DeckSize::Short36),
            52 => Ok(DeckSize::Full52),
            other => Err(GameError::UnsupportedDeckSize(other)),
        }
    }
}

/// The static, ordered list of cards for one deck size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    size: DeckSize,
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard(size: DeckSize) -> Self {
        Self {
            size,
            cards: crate::hardcoded_cards::create_cards(size),
        }
    }

    pub fn size(&self) -> DeckSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Draw `count` distinct cards and put them in random order.
    ///
    /// Every `count`-subset is equally likely, and so is every order of it.
    pub fn draw<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(GameError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        let mut hand: Vec<Card> = self.cards.choose_multiple(rng, count).cloned().collect();
        // choose_multiple does not promise a random order
        hand.shuffle(rng);
        Ok(hand)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard(DeckSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_deck_size_conversions() {
        assert_eq!(DeckSize::try_from(36), Ok(DeckSize::Short36));
        assert_eq!(DeckSize::try_from(52), Ok(DeckSize::Full52));
        assert_eq!(
            DeckSize::try_from(40),
            Err(GameError::UnsupportedDeckSize(40))
        );
        assert_eq!(usize::from(DeckSize::Short36), 36);
    }

    #[test]
    fn test_standard_decks() {
        for size in DeckSize::ALL {
            let deck = Deck::standard(size);
            assert_eq!(deck.len(), size.count());
            assert_eq!(deck.size(), size);
        }
    }

    #[test]
    fn test_draw_is_subset_without_repeats() {
        let deck = Deck::standard(DeckSize::Full52);
        let mut rng = StdRng::seed_from_u64(7);
        for count in [1, 5, 26, 52] {
            let hand = deck.draw(count, &mut rng).unwrap();
            assert_eq!(hand.len(), count);
            let names: HashSet<_> = hand.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names.len(), count, "hand must not repeat a card");
            assert!(hand.iter().all(|c| deck.contains(&c.name)));
        }
    }

    #[test]
    fn test_full_draw_is_permutation() {
        let deck = Deck::standard(DeckSize::Short36);
        let mut rng = StdRng::seed_from_u64(11);
        let hand = deck.draw(36, &mut rng).unwrap();
        let mut drawn: Vec<_> = hand.iter().map(|c| c.name.clone()).collect();
        let mut all: Vec<_> = deck.iter().map(|c| c.name.clone()).collect();
        drawn.sort();
        all.sort();
        assert_eq!(drawn, all);
    }

    #[test]
    fn test_draw_too_many_fails() {
        let deck = Deck::standard(DeckSize::Short36);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            deck.draw(37, &mut rng),
            Err(GameError::NotEnoughCards {
                requested: 37,
                available: 36
            })
        );
    }

    #[test]
    fn test_draw_order_is_roughly_uniform() {
        // Every card of a 4-card deck should lead the hand about a quarter of the time
        let deck = Deck {
            size: DeckSize::Short36,
            cards: (0..4).map(|i| Card::new(format!("c{i}"), "x.png")).collect(),
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut first = [0usize; 4];
        let rounds = 8000;
        for _ in 0..rounds {
            let hand = deck.draw(4, &mut rng).unwrap();
            let idx: usize = hand[0].name[1..].parse().unwrap();
            first[idx] += 1;
        }
        for count in first {
            assert!((1700..=2300).contains(&count), "skewed first position: {first:?}");
        }
    }

    #[test]
    fn test_draw_subset_is_roughly_uniform() {
        // Single-card draws from 4 cards should hit each card about equally
        let deck = Deck {
            size: DeckSize::Short36,
            cards: (0..4).map(|i| Card::new(format!("c{i}"), "x.png")).collect(),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut hits = [0usize; 4];
        for _ in 0..8000 {
            let hand = deck.draw(1, &mut rng).unwrap();
            let idx: usize = hand[0].name[1..].parse().unwrap();
            hits[idx] += 1;
        }
        for count in hits {
            assert!((1700..=2300).contains(&count), "skewed subset choice: {hits:?}");
        }
    }
}
