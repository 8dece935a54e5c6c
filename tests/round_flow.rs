//! Full rounds played through the public controller API

use anyhow::Result;
use card_recall::game::controller::{GameController, Outcome, Phase};
use card_recall::game::deck::{Deck, DeckSize};
use card_recall::{GameError, RoundSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn shown_names(game: &GameController) -> Vec<String> {
    game.hand().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_perfect_recall_round() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = GameController::default();
    game.set_deck_size(DeckSize::Short36)?;
    game.set_card_count(6)?;
    game.set_timer_secs(10)?;

    game.start(0.0, &mut rng)?;
    assert!(game.showing_cards());
    assert!(!game.tick(9.99));
    assert!(game.tick(10.0));
    assert!(game.showing_selector());

    for name in shown_names(&game) {
        game.select(&name)?;
    }
    assert_eq!(game.submit()?, Outcome::Correct);
    assert_eq!(game.phase(), Phase::Idle);
    Ok(())
}

#[test]
fn test_wrong_order_round() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = GameController::default();
    game.set_card_count(3)?;
    game.start(0.0, &mut rng)?;
    game.tick(60.0);

    let mut names = shown_names(&game);
    names.swap(0, 1);
    for name in &names {
        game.select(name)?;
    }
    let outcome = game.submit()?;
    assert_eq!(outcome, Outcome::Incorrect);
    assert_eq!(outcome.message(), "Incorrect!");
    Ok(())
}

#[test]
fn test_hand_is_subset_for_many_seeds() -> Result<()> {
    for size in DeckSize::ALL {
        let deck = Deck::standard(size);
        let all: HashSet<&str> = deck.iter().map(|c| c.name.as_str()).collect();
        for seed in 0..50 {
            let count = 1 + (seed as usize % size.count());
            let mut game = GameController::new(RoundSettings {
                deck_size: size,
                card_count: count,
                timer_secs: 1,
            })?;
            game.start(0.0, &mut StdRng::seed_from_u64(seed))?;
            let names: HashSet<&str> = game.hand().iter().map(|c| c.name.as_str()).collect();
            assert_eq!(game.hand().len(), count);
            assert_eq!(names.len(), count);
            assert!(names.is_subset(&all));
        }
    }
    Ok(())
}

#[test]
fn test_shuffle_varies_between_rounds() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = GameController::default();
    let mut orders = HashSet::new();
    for i in 0..10 {
        game.start(f64::from(i), &mut rng)?;
        orders.insert(shown_names(&game));
        game.reset();
    }
    assert!(orders.len() > 1, "every round dealt the same order");
    Ok(())
}

#[test]
fn test_reset_mid_round_never_opens_selector() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = GameController::default();
    game.set_timer_secs(2)?;
    game.start(0.0, &mut rng)?;
    assert!(!game.tick(1.0));
    game.reset();
    for t in 2..10 {
        assert!(!game.tick(f64::from(t)));
    }
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.submit(), Err(GameError::NotSelecting));
    Ok(())
}

#[test]
fn test_reset_then_start_uses_defaults() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = GameController::default();
    game.set_deck_size(DeckSize::Short36)?;
    game.set_card_count(4)?;
    game.reset();
    game.start(0.0, &mut rng)?;
    assert_eq!(game.hand().len(), 52);
    Ok(())
}

#[test]
fn test_deck_switch_bounds() -> Result<()> {
    let mut game = GameController::default();
    game.set_deck_size(DeckSize::Short36)?;
    assert_eq!(
        game.set_card_count(37),
        Err(GameError::CardCountOutOfRange { value: 37, max: 36 })
    );
    game.set_deck_size(DeckSize::Full52)?;
    game.set_card_count(37)?;
    assert_eq!(game.settings().card_count, 37);
    Ok(())
}
