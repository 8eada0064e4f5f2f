use rand::Rng;

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// Working view of one hand: both hands, the hole slot and the shoe.
///
/// A table never persists across engine calls. It is rebuilt from a
/// [`GameState`] at the start of every operation, mutated, and folded back
/// into the next snapshot — value-to-value scaffolding, no object identity.
#[derive(Debug, Clone)]
pub struct Table {
    pub dealer_hand: Hand,
    pub player_hand: Hand,
    pub hole_card: Option<Card>,
    pub shoe: Shoe,
}

impl Table {
    pub fn new(num_decks: u32) -> Self {
        Self {
            dealer_hand: Hand::new(),
            player_hand: Hand::new(),
            hole_card: None,
            shoe: Shoe::new(num_decks),
        }
    }

    pub fn from_state(state: &GameState) -> Self {
        Self {
            dealer_hand: state.dealer_hand.clone(),
            player_hand: state.player_hand.clone(),
            hole_card: state.hole_card,
            shoe: state.shoe.clone(),
        }
    }

    /// Deals the opening hand in casino order: dealer up-card, player card,
    /// dealer hole card (face down), player card.
    pub fn deal_initial<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let up = self.shoe.draw(rng)?;
        self.dealer_hand.push(up);
        let first = self.shoe.draw(rng)?;
        self.player_hand.push(first);
        self.hole_card = Some(self.shoe.draw(rng)?);
        let second = self.shoe.draw(rng)?;
        self.player_hand.push(second);
        Ok(())
    }

    /// Resolves the dealer's turn. No-op when the player has already busted
    /// or the dealer's visible hand already shows 21. Otherwise the hole
    /// card is revealed into the dealer hand and the dealer draws while at
    /// 16 or below (stands on 17+, no soft-17 special case).
    pub fn dealer_play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.player_hand.value() > 21 {
            return Ok(());
        }
        if self.dealer_hand.value() == 21 {
            return Ok(());
        }
        if let Some(hole) = self.hole_card.take() {
            self.dealer_hand.push(hole);
        }
        while self.dealer_hand.value() <= 16 {
            let card = self.shoe.draw(rng)?;
            self.dealer_hand.push(card);
        }
        Ok(())
    }

    pub fn is_busted(&self) -> bool {
        self.player_hand.value() > 21
    }

    /// Human-readable view. The dealer line hides everything but the up-card
    /// until the hole card has been revealed.
    pub fn render(&self) -> String {
        let dealer_line = match (self.hole_card, self.dealer_hand.first()) {
            (Some(_), Some(up)) => format!("Dealer hand: [{up}, ?], Value: ?"),
            _ => format!(
                "Dealer hand: {}, Value: {}",
                self.dealer_hand,
                self.dealer_hand.value()
            ),
        };
        let player_line = format!(
            "Player hand: {}, Value: {}",
            self.player_hand,
            self.player_hand.value()
        );
        format!("{dealer_line}\n{player_line}")
    }
}
