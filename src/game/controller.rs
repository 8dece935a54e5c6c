//! Round state and the transitions between showing, selecting and idle.

use rand::Rng;
use std::time::Duration;

use super::card::Card;
use super::deck::{Deck, DeckSize};
use super::timer::{RevealTimer, RoundId};
use crate::config::{check_card_count, check_timer, RoundSettings};
use crate::error::{GameError, Result};

/// Where the current round is.
///
/// Showing the hand and showing the selector are mutually exclusive, so they
/// are one enum rather than two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Showing(RoundId),
    Selecting(RoundId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "Incorrect!",
        }
    }

    pub fn kind(self) -> MessageKind {
        match self {
            Outcome::Correct => MessageKind::Success,
            Outcome::Incorrect => MessageKind::Error,
        }
    }
}

pub struct GameController {
    defaults: RoundSettings,
    settings: RoundSettings,
    deck: Deck,
    hand: Vec<Card>,
    selection: Vec<String>,
    phase: Phase,
    timer: RevealTimer,
    outcome: Option<Outcome>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::with_valid_defaults(RoundSettings::default())
    }
}

impl GameController {
    /// Create a controller whose initial (and reset) settings are `defaults`.
    pub fn new(defaults: RoundSettings) -> Result<Self> {
        defaults.validate()?;
        Ok(Self::with_valid_defaults(defaults))
    }

    fn with_valid_defaults(defaults: RoundSettings) -> Self {
        Self {
            defaults,
            settings: defaults,
            deck: Deck::standard(defaults.deck_size),
            hand: Vec::new(),
            selection: Vec::new(),
            phase: Phase::Idle,
            timer: RevealTimer::new(),
            outcome: None,
        }
    }

    pub fn settings(&self) -> RoundSettings {
        self.settings
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The cards shown this round, in the order they were shown.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn showing_cards(&self) -> bool {
        matches!(self.phase, Phase::Showing(_))
    }

    pub fn showing_selector(&self) -> bool {
        matches!(self.phase, Phase::Selecting(_))
    }

    pub fn is_round_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.iter().any(|s| s == name)
    }

    /// Time left before the hand is hidden.
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        match self.phase {
            Phase::Showing(_) => self.timer.remaining(now),
            _ => None,
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_round_active() {
            Err(GameError::RoundInProgress)
        } else {
            Ok(())
        }
    }

    /// Switch decks. The card count is pulled down to the new deck size if it
    /// no longer fits.
    pub fn set_deck_size(&mut self, size: DeckSize) -> Result<()> {
        self.ensure_idle()?;
        if size == self.settings.deck_size {
            return Ok(());
        }
        self.deck = Deck::standard(size);
        self.settings.deck_size = size;
        self.settings.card_count = self.settings.card_count.min(size.count());
        tracing::debug!(deck = size.count(), card_count = self.settings.card_count, "deck switched");
        Ok(())
    }

    pub fn set_card_count(&mut self, value: i64) -> Result<()> {
        self.ensure_idle()?;
        self.settings.card_count = check_card_count(value, self.settings.deck_size)?;
        Ok(())
    }

    pub fn set_timer_secs(&mut self, value: i64) -> Result<()> {
        self.ensure_idle()?;
        self.settings.timer_secs = check_timer(value)?;
        Ok(())
    }

    /// Begin a round: deal a fresh hand and arm the reveal timer.
    ///
    /// Starting while a round is running abandons it; its timer is replaced so
    /// it can never hide the new hand early.
    pub fn start<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> Result<RoundId> {
        let hand = self.deck.draw(self.settings.card_count, rng)?;
        self.timer.cancel();
        self.clear_round();
        self.hand = hand;
        let delay = Duration::from_secs(u64::from(self.settings.timer_secs));
        let round = self.timer.schedule(now, delay);
        self.phase = Phase::Showing(round);
        tracing::info!(
            %round,
            cards = self.hand.len(),
            deck = self.settings.deck_size.count(),
            secs = self.settings.timer_secs,
            "round started"
        );
        Ok(round)
    }

    /// Drive the reveal timer from the frame clock. Returns true when the hand
    /// was hidden during this call.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.timer.poll(now) {
            Some(round) => self.reveal_elapsed(round),
            None => false,
        }
    }

    /// Hide the hand of `round` and open the selector. Expiries of rounds that
    /// were reset or replaced are ignored.
    pub fn reveal_elapsed(&mut self, round: RoundId) -> bool {
        if self.phase != Phase::Showing(round) {
            tracing::debug!(%round, phase = ?self.phase, "ignoring stale reveal");
            return false;
        }
        self.phase = Phase::Selecting(round);
        tracing::debug!(%round, "hand hidden, selection open");
        true
    }

    /// Cancel any pending reveal and go back to the initial settings.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.clear_round();
        if self.deck.size() != self.defaults.deck_size {
            self.deck = Deck::standard(self.defaults.deck_size);
        }
        self.settings = self.defaults;
        tracing::info!("game reset");
    }

    fn clear_round(&mut self) {
        self.hand.clear();
        self.selection.clear();
        self.outcome = None;
        self.phase = Phase::Idle;
    }

    fn ensure_selecting(&self) -> Result<()> {
        if self.showing_selector() {
            Ok(())
        } else {
            Err(GameError::NotSelecting)
        }
    }

    /// Append a card to the recalled sequence.
    pub fn select(&mut self, name: &str) -> Result<()> {
        self.ensure_selecting()?;
        if !self.deck.contains(name) {
            return Err(GameError::UnknownCard(name.to_string()));
        }
        if self.is_selected(name) {
            return Err(GameError::AlreadySelected(name.to_string()));
        }
        self.selection.push(name.to_string());
        Ok(())
    }

    /// Remove a card from the recalled sequence, keeping the others in order.
    pub fn deselect(&mut self, name: &str) -> Result<()> {
        self.ensure_selecting()?;
        self.selection.retain(|s| s != name);
        Ok(())
    }

    /// Compare the recalled sequence with the hand and close the selector.
    pub fn submit(&mut self) -> Result<Outcome> {
        self.ensure_selecting()?;
        let shown = self.hand.iter().map(|c| c.name.as_str());
        let outcome = if shown.eq(self.selection.iter().map(String::as_str)) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.outcome = Some(outcome);
        self.phase = Phase::Idle;
        tracing::info!(
            ?outcome,
            shown = self.hand.len(),
            selected = self.selection.len(),
            "round submitted"
        );
        Ok(outcome)
    }
}
