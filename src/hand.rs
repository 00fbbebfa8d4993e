use std::fmt;

use crate::{card::Card, error::HandError};

/// A player's or dealer's cards for one round, in the order they were dealt.
///
/// Cards are only ever appended. `Clone` yields an independent hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Initial deal: `first` then `second`.
    pub fn from_pair(first: Card, second: Card) -> Self {
        Hand {
            cards: vec![first, second],
        }
    }

    /// A split hand's first card, or a dealer's up card.
    pub fn from_card(card: Card) -> Self {
        Hand { cards: vec![card] }
    }

    /// Blackjack total. Face cards count 10 and at most one ace is promoted to 11.
    pub fn value(&self) -> u32 {
        self.totals().0
    }

    /// True while an ace is being counted as 11.
    pub fn is_soft(&self) -> bool {
        self.totals().1
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn first_card(&self) -> Result<Card, HandError> {
        match self.cards.first() {
            Some(card) => Ok(*card),
            None => {
                log::debug!("first card requested from an empty hand");
                Err(HandError::EmptyHand)
            }
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        log::trace!("added {}, hand now {}", card, self);
    }

    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    fn totals(&self) -> (u32, bool) {
        let mut total = 0u32;
        let mut has_ace = false;

        for card in &self.cards {
            let value = card.value().min(10);
            if value == 1 {
                has_ace = true;
            }
            total += u32::from(value);
        }

        // a second ace at 11 would need total + 20 <= 21, impossible with two aces counted
        if has_ace && total + 10 <= 21 {
            (total + 10, true)
        } else {
            (total, false)
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{} ({})", cards.join(" ").trim(), self.value())
    }
}
