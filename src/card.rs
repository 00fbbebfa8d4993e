use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HandError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value: ace is 1, jack/queen/king are 11/12/13.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_code(code: &str) -> Option<Rank> {
        match code {
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" | "T" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn as_char(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A playing card. Serializes as its display form, e.g. `"JS"` or `"10D"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_code(), self.suit.as_char())
    }
}

impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let invalid = || HandError::InvalidCard(s.to_string());
        let suit_char = code.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank = Rank::from_code(&code[..code.len() - suit_char.len_utf8()]).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = HandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect()
    }

    #[test]
    fn display_matches_rank_and_suit_codes() {
        assert_eq!(Card::new(Rank::Jack, Suit::Spades).to_string(), "JS");
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "AH");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
    }

    #[test]
    fn parse_accepts_every_display_form() {
        for card in full_deck() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_accepts_t_for_ten() {
        assert_eq!("qc".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Clubs)));
        assert_eq!("TH".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "S", "1S", "11H", "AX", "ZZ", "+5C", "05H", "009S"] {
            assert_eq!(
                bad.parse::<Card>(),
                Err(HandError::InvalidCard(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn face_cards_carry_values_above_ten() {
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).value(), 1);
        assert_eq!(Card::new(Rank::Jack, Suit::Clubs).value(), 11);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).value(), 13);
    }

    #[test]
    fn serializes_as_display_string() {
        let card = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"KD\"");
        let back: Card = serde_json::from_str("\"kd\"").unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"1D\"").is_err());
    }
}
