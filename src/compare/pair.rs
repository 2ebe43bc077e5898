//! Card-pair comparators.
//!
//! A comparator tests the relationship between two cards that sit next to
//! each other in a sequence: `first` is nearer the base of the pile, `second`
//! nearer its visible top. Comparators are named values of `Compare` rather
//! than function pointers, so variants can store and compare them freely.

use serde::{Deserialize, Serialize};

use crate::core::{Card, MoveError, ACE, KING};

/// Two adjacent cards under test.
#[derive(Clone, Copy, Debug)]
pub struct CardPair<'a> {
    pub first: &'a Card,
    pub second: &'a Card,
}

impl<'a> CardPair<'a> {
    #[must_use]
    pub fn new(first: &'a Card, second: &'a Card) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn either_prone(&self) -> bool {
        self.first.prone() || self.second.prone()
    }

    fn ascending(&self) -> bool {
        self.first.ordinal() + 1 == self.second.ordinal()
    }

    fn descending(&self) -> bool {
        self.first.ordinal() == self.second.ordinal() + 1
    }

    fn same_color(&self) -> bool {
        self.first.color() == self.second.color()
    }

    fn same_suit(&self) -> bool {
        self.first.suit() == self.second.suit()
    }

    // King on Ace
    fn wraps_down(&self) -> bool {
        self.first.ordinal() == ACE && self.second.ordinal() == KING
    }

    // Ace on King
    fn wraps_up(&self) -> bool {
        self.first.ordinal() == KING && self.second.ordinal() == ACE
    }
}

/// Iterate the adjacent pairs of a run of cards, base first.
pub fn pairs(cards: &[Card]) -> impl Iterator<Item = CardPair<'_>> {
    cards.windows(2).map(|w| CardPair::new(&w[0], &w[1]))
}

/// Named comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compare {
    Up,
    Down,
    UpAltColor,
    UpSuit,
    UpSuitWrap,
    DownColor,
    DownAltColor,
    DownColorWrap,
    DownAltColorWrap,
    DownSuit,
    DownOtherSuit,
    DownSuitWrap,
}

impl Compare {
    /// Test one pair.
    pub fn check(self, pair: CardPair<'_>) -> Result<(), MoveError> {
        match self {
            Compare::Up => up(pair),
            Compare::Down => down(pair),
            Compare::UpAltColor => {
                alt_color(pair)?;
                up(pair)
            }
            Compare::UpSuit => {
                same_suit(pair)?;
                up(pair)
            }
            Compare::UpSuitWrap => {
                same_suit(pair)?;
                if pair.wraps_up() || pair.ascending() {
                    Ok(())
                } else {
                    Err(MoveError::NotAscendingWrap)
                }
            }
            Compare::DownColor => {
                same_color(pair)?;
                down(pair)
            }
            Compare::DownAltColor => {
                alt_color(pair)?;
                down(pair)
            }
            Compare::DownColorWrap => {
                same_color(pair)?;
                down_wrap(pair)
            }
            Compare::DownAltColorWrap => {
                alt_color(pair)?;
                down_wrap(pair)
            }
            Compare::DownSuit => {
                same_suit(pair)?;
                down(pair)
            }
            Compare::DownOtherSuit => {
                if pair.same_suit() {
                    return Err(MoveError::SameSuit);
                }
                down(pair)
            }
            Compare::DownSuitWrap => {
                same_suit(pair)?;
                down_wrap(pair)
            }
        }
    }

    /// Test two cards, `first` nearer the base.
    pub fn cards(self, first: &Card, second: &Card) -> Result<(), MoveError> {
        self.check(CardPair::new(first, second))
    }

    /// Test every adjacent pair of a run, stopping at the first failure.
    pub fn run(self, cards: &[Card]) -> Result<(), MoveError> {
        pairs(cards).try_for_each(|pair| self.check(pair))
    }

    /// True if the comparator relies on card colours (so is meaningless
    /// when a variant renders all suits in one colour).
    #[must_use]
    pub const fn uses_color(self) -> bool {
        matches!(
            self,
            Compare::UpAltColor
                | Compare::DownColor
                | Compare::DownAltColor
                | Compare::DownColorWrap
                | Compare::DownAltColorWrap
        )
    }
}

fn up(pair: CardPair<'_>) -> Result<(), MoveError> {
    if pair.ascending() {
        Ok(())
    } else {
        Err(MoveError::NotAscending)
    }
}

fn down(pair: CardPair<'_>) -> Result<(), MoveError> {
    if pair.descending() {
        Ok(())
    } else {
        Err(MoveError::NotDescending)
    }
}

fn down_wrap(pair: CardPair<'_>) -> Result<(), MoveError> {
    if pair.wraps_down() || pair.descending() {
        Ok(())
    } else {
        Err(MoveError::NotDescendingWrap)
    }
}

fn same_color(pair: CardPair<'_>) -> Result<(), MoveError> {
    if pair.same_color() {
        Ok(())
    } else {
        Err(MoveError::NotSameColor)
    }
}

fn alt_color(pair: CardPair<'_>) -> Result<(), MoveError> {
    if pair.same_color() {
        Err(MoveError::NotAlternatingColor)
    } else {
        Ok(())
    }
}

fn same_suit(pair: CardPair<'_>) -> Result<(), MoveError> {
    if pair.same_suit() {
        Ok(())
    } else {
        Err(MoveError::NotSameSuit)
    }
}

/// Count adjacent pairs that fail `compare` or hide a face-down card.
///
/// Face-down pairs always count: the player cannot see whether they are in
/// order. Used for progress display, never for legality.
#[must_use]
pub fn unsorted_pairs(cards: &[Card], compare: Compare) -> usize {
    pairs(cards)
        .filter(|pair| pair.either_prone() || compare.check(*pair).is_err())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, Suit};

    fn up_card(suit: Suit, ordinal: u8) -> Card {
        let mut c = Card::new(CardId::new(0, suit, ordinal));
        c.set_prone(false);
        c
    }

    #[test]
    fn test_up_down() {
        let two = up_card(Suit::Heart, 2);
        let three = up_card(Suit::Spade, 3);
        assert!(Compare::Up.cards(&two, &three).is_ok());
        assert_eq!(Compare::Up.cards(&three, &two), Err(MoveError::NotAscending));
        assert!(Compare::Down.cards(&three, &two).is_ok());
        assert_eq!(Compare::Down.cards(&two, &three), Err(MoveError::NotDescending));
    }

    #[test]
    fn test_color_rules() {
        let black_eight = up_card(Suit::Club, 8);
        let red_seven = up_card(Suit::Diamond, 7);
        let black_seven = up_card(Suit::Spade, 7);

        assert!(Compare::DownAltColor.cards(&black_eight, &red_seven).is_ok());
        assert_eq!(
            Compare::DownAltColor.cards(&black_eight, &black_seven),
            Err(MoveError::NotAlternatingColor)
        );
        assert!(Compare::DownColor.cards(&black_eight, &black_seven).is_ok());
        assert_eq!(
            Compare::DownColor.cards(&black_eight, &red_seven),
            Err(MoveError::NotSameColor)
        );
    }

    #[test]
    fn test_suit_rules() {
        let nine = up_card(Suit::Heart, 9);
        let eight_h = up_card(Suit::Heart, 8);
        let eight_d = up_card(Suit::Diamond, 8);

        assert!(Compare::DownSuit.cards(&nine, &eight_h).is_ok());
        assert_eq!(Compare::DownSuit.cards(&nine, &eight_d), Err(MoveError::NotSameSuit));
        assert!(Compare::DownOtherSuit.cards(&nine, &eight_d).is_ok());
        assert_eq!(Compare::DownOtherSuit.cards(&nine, &eight_h), Err(MoveError::SameSuit));
    }

    #[test]
    fn test_wraps() {
        let ace = up_card(Suit::Club, 1);
        let king = up_card(Suit::Club, 13);
        let red_king = up_card(Suit::Heart, 13);

        assert!(Compare::DownSuitWrap.cards(&ace, &king).is_ok());
        assert!(Compare::UpSuitWrap.cards(&king, &ace).is_ok());
        assert!(Compare::DownColorWrap.cards(&ace, &king).is_ok());
        assert!(Compare::DownAltColorWrap.cards(&ace, &red_king).is_ok());
        assert_eq!(
            Compare::DownSuitWrap.cards(&king, &ace),
            Err(MoveError::NotDescendingWrap)
        );
    }

    #[test]
    fn test_run() {
        let run = [up_card(Suit::Spade, 5), up_card(Suit::Heart, 4), up_card(Suit::Club, 3)];
        assert!(Compare::DownAltColor.run(&run).is_ok());
        assert!(Compare::DownAltColor.run(&run[..1]).is_ok());
        assert!(Compare::DownAltColor.run(&[]).is_ok());
        assert_eq!(Compare::DownSuit.run(&run), Err(MoveError::NotSameSuit));
    }

    #[test]
    fn test_unsorted_pairs() {
        let mut cards = vec![
            up_card(Suit::Spade, 9),
            up_card(Suit::Spade, 8),
            up_card(Suit::Heart, 2),
            up_card(Suit::Heart, 1),
        ];
        assert_eq!(unsorted_pairs(&cards, Compare::DownSuit), 1);

        cards[0].set_prone(true);
        assert_eq!(unsorted_pairs(&cards, Compare::DownSuit), 2);
        assert_eq!(unsorted_pairs(&cards[..1], Compare::DownSuit), 0);
    }

    #[test]
    fn test_uses_color() {
        assert!(Compare::DownAltColor.uses_color());
        assert!(!Compare::DownSuit.uses_color());
    }
}
