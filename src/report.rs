use serde::{Deserialize, Serialize};

use crate::{card::Card, hand::Hand};

#[derive(Debug, Deserialize)]
pub struct HandInput {
    pub cards: Vec<Card>,
    #[serde(default)]
    pub draws: Vec<Card>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandReport {
    pub cards: Vec<Card>,
    pub display: String,
    pub value: u32,
    pub soft: bool,
    pub blackjack: bool,
    pub num_cards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_card: Option<Card>,
}

impl From<&Hand> for HandReport {
    fn from(hand: &Hand) -> Self {
        HandReport {
            cards: hand.cards(),
            display: hand.to_string(),
            value: hand.value(),
            soft: hand.is_soft(),
            blackjack: hand.is_blackjack(),
            num_cards: hand.num_cards(),
            up_card: hand.first_card().ok(),
        }
    }
}

/// Builds the hand the way a table would: the opening cards pick the
/// constructor, draws are appended afterwards.
pub fn build_hand(input: &HandInput) -> Hand {
    let mut hand = match input.cards.as_slice() {
        [] => Hand::new(),
        [card] => Hand::from_card(*card),
        [first, second, rest @ ..] => {
            let mut hand = Hand::from_pair(*first, *second);
            for card in rest {
                hand.add_card(*card);
            }
            hand
        }
    };
    for card in &input.draws {
        hand.add_card(*card);
    }
    hand
}

pub fn evaluate(input: HandInput) -> HandReport {
    let hand = build_hand(&input);
    let report = HandReport::from(&hand);
    log::debug!(
        "evaluated {} cards: value {} soft {} blackjack {}",
        report.num_cards,
        report.value,
        report.soft,
        report.blackjack
    );
    report
}
