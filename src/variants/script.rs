//! Shared rule helpers used by most variants.
//!
//! Variants are mostly a choice of comparator per destination plus a
//! dealing pattern; the pieces they have in common live here.

use crate::compare::Compare;
use crate::core::{Card, MoveError, PileId, KING};
use crate::piles::Board;

use super::Variant;

/// Default tap handling: dispatch on the tapped pile's category.
pub fn tail_tapped<V: Variant + ?Sized>(
    variant: &V,
    board: &mut Board,
    pile: PileId,
    index: usize,
) -> Result<(), MoveError> {
    let category = board.get(pile)?.category();
    category.tail_tapped(variant, board, pile, index)
}

/// Join rule for a pile that builds on its top card with `compare`.
///
/// An empty pile takes anything; its label has already been checked.
pub fn append_onto(board: &Board, dst: PileId, tail: &[Card], compare: Compare) -> Result<(), MoveError> {
    match (board.peek(dst), tail.first()) {
        (Some(top), Some(lead)) => compare.cards(top, lead),
        _ => Ok(()),
    }
}

/// A Discard takes a complete run, King first, ordered by `compare`.
pub fn discard_run(tail: &[Card], compare: Compare) -> Result<(), MoveError> {
    match tail.first() {
        Some(lead) if lead.ordinal() == KING => compare.run(tail),
        _ => Err(MoveError::DiscardNotKing),
    }
}

/// Longest tail that can be moved onto `dst` one card at a time through
/// empty cells and empty tableaux.
///
/// `(1 + empty cells) * 2 ^ (unlabelled empty tableaux other than dst)`
#[must_use]
pub fn power_limit(board: &Board, dst: PileId) -> usize {
    let cells = board.empty_cells();
    let tabs = board.empty_tableaux(Some(dst)).min(16) as u32;
    (1 + cells).saturating_mul(1usize << tabs)
}

/// Reject a tail longer than `power_limit`.
pub fn check_power_move(board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
    let limit = power_limit(board, dst);
    if tail.len() > limit {
        Err(MoveError::NotEnoughSpace(limit, tail.len()))
    } else {
        Ok(())
    }
}

/// Deal `count` cards from the Stock to each pile in turn, row by row.
///
/// `prone(row)` decides the face of the cards dealt in each row. Stops
/// quietly if the Stock runs out.
pub fn deal_rows(board: &mut Board, piles: &[PileId], count: usize, prone: impl Fn(usize) -> bool) {
    for row in 0..count {
        for &pile in piles {
            if board.deal_to(pile, prone(row)).is_err() {
                return;
            }
        }
    }
}

/// Deal a different number of cards to each pile, all face down, then turn
/// the top card of each face up.
pub fn deal_counts(board: &mut Board, piles: &[PileId], counts: &[usize]) {
    for (&pile, &count) in piles.iter().zip(counts) {
        for _ in 0..count {
            if board.deal_to(pile, true).is_err() {
                break;
            }
        }
        board.flip_up_exposed(pile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, Slot, Suit};
    use crate::piles::{Category, FanType, MoveType};

    fn face_up(suit: Suit, ordinal: u8) -> Card {
        let mut c = Card::new(CardId::new(0, suit, ordinal));
        c.set_prone(false);
        c
    }

    fn board_with(cells: usize, tabs: usize) -> (Board, Vec<PileId>) {
        let mut board = Board::new();
        board.add_pile(Category::Stock, Slot::hidden(), FanType::None, MoveType::None);
        for x in 0..cells {
            board.add_pile(Category::Cell, Slot::new(x as i16, 0), FanType::None, MoveType::One);
        }
        let tabs = (0..tabs)
            .map(|x| board.add_pile(Category::Tableau, Slot::new(x as i16, 1), FanType::Down, MoveType::OnePlus))
            .collect();
        board.load_stock(CardId::full_deal(1, 4));
        (board, tabs)
    }

    #[test]
    fn test_power_limit() {
        let (mut board, tabs) = board_with(4, 8);
        // all empty: dst not counted
        assert_eq!(power_limit(&board, tabs[0]), 5 * 128);

        deal_rows(&mut board, &tabs, 1, |_| false);
        assert_eq!(power_limit(&board, tabs[0]), 5);

        let stock = board.stock().unwrap();
        board.move_card(stock, board.cells()[0]);
        assert_eq!(power_limit(&board, tabs[0]), 4);
    }

    #[test]
    fn test_power_limit_skips_king_spaces() {
        let (mut board, tabs) = board_with(2, 4);
        deal_rows(&mut board, &tabs[..1], 1, |_| false);
        assert_eq!(power_limit(&board, tabs[0]), 3 * 8);

        for &t in &tabs {
            board.set_label(t, "K");
        }
        assert_eq!(power_limit(&board, tabs[0]), 3);
        board.set_label(tabs[1], "*");
        assert_eq!(power_limit(&board, tabs[0]), 6);
    }

    #[test]
    fn test_check_power_move() {
        let (mut board, tabs) = board_with(0, 2);
        deal_rows(&mut board, &tabs, 1, |_| false);
        let tail = [face_up(Suit::Heart, 4), face_up(Suit::Spade, 3)];
        assert_eq!(
            check_power_move(&board, tabs[0], &tail),
            Err(MoveError::NotEnoughSpace(1, 2))
        );
        assert!(check_power_move(&board, tabs[0], &tail[..1]).is_ok());
    }

    #[test]
    fn test_discard_run() {
        let run: Vec<Card> = (1..=13).rev().map(|o| face_up(Suit::Club, o)).collect();
        assert!(discard_run(&run, Compare::DownSuit).is_ok());
        assert_eq!(discard_run(&run[1..], Compare::DownSuit), Err(MoveError::DiscardNotKing));
    }

    #[test]
    fn test_deal_counts() {
        let (mut board, tabs) = board_with(0, 3);
        deal_counts(&mut board, &tabs, &[1, 2, 3]);

        for (i, &t) in tabs.iter().enumerate() {
            let cards = board.cards(t);
            assert_eq!(cards.len(), i + 1);
            assert!(!cards[i].prone());
            assert!(cards[..i].iter().all(Card::prone));
        }
        assert_eq!(board.len(board.stock().unwrap()), 46);
    }

    #[test]
    fn test_append_onto() {
        let (mut board, tabs) = board_with(0, 1);
        assert!(append_onto(&board, tabs[0], &[face_up(Suit::Club, 2)], Compare::DownAltColor).is_ok());

        deal_rows(&mut board, &tabs, 1, |_| false);
        // stock top is K♠
        assert!(append_onto(&board, tabs[0], &[face_up(Suit::Heart, 12)], Compare::DownAltColor).is_ok());
        assert_eq!(
            append_onto(&board, tabs[0], &[face_up(Suit::Club, 12)], Compare::DownAltColor),
            Err(MoveError::NotAlternatingColor)
        );
    }
}
