//! The game session.
//!
//! A `Baize` owns one board, the variant that governs it, the undo history
//! and the queue of notices for the presentation layer. Every player action
//! goes through a transaction:
//!
//! 1. The action runs against the board (validation first, then mutation).
//! 2. If it fails, the board is put back exactly as it was and the reason
//!    is returned.
//! 3. If it succeeds, exposed tableau cards are turned up, the variant's
//!    `after_move` hook runs, the prior state is pushed to the history and
//!    the board invariants are checked.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::baize::Baize;
//! use rust_patience::core::BaizeConfig;
//! use rust_patience::variants::Registry;
//!
//! let registry = Registry::standard();
//! let mut baize = Baize::open(&registry, "Klondike", BaizeConfig::default().with_seed(7)).unwrap();
//!
//! let stock = baize.board().stock().unwrap();
//! baize.tap(stock, 0).unwrap();
//! assert_eq!(baize.board().len(baize.board().waste().unwrap()), 1);
//!
//! baize.undo().unwrap();
//! assert!(baize.board().is_empty(baize.board().waste().unwrap()));
//! ```

use std::sync::Arc;

use log::{debug, error, info, warn};

use super::history::History;
use super::notice::Notice;
use super::snapshot::SavedBaize;
use crate::core::{BaizeConfig, CardId, DealRng, MoveError, PileId, RestoreError};
use crate::piles::category::{discard_size, send_home};
use crate::piles::{Board, Category, MoveType, Placeholder, Tails};
use crate::variants::{Registry, Variant};

/// One game session.
#[derive(Clone, Debug)]
pub struct Baize {
    name: String,
    variant: Arc<dyn Variant>,
    board: Board,
    config: BaizeConfig,
    /// Session RNG; draws the seed of each new deal.
    rng: DealRng,
    /// Seed of the current deal.
    seed: u64,
    history: History,
    notices: Vec<Notice>,
    won: bool,
}

impl Baize {
    /// Start a session with `variant`, dealing with `config.seed`.
    #[must_use]
    pub fn new(name: impl Into<String>, variant: Arc<dyn Variant>, config: BaizeConfig) -> Self {
        let board = deal(variant.as_ref(), config.seed);
        let mut baize = Self {
            name: name.into(),
            variant,
            board,
            rng: DealRng::new(config.seed),
            seed: config.seed,
            history: History::new(config.history_limit),
            config,
            notices: Vec::new(),
            won: false,
        };
        baize.enforce_invariants();
        baize.won = baize.variant.complete(&baize.board);
        info!("{}: new deal, seed {}", baize.name, baize.seed);
        baize
    }

    /// Start a session with a variant from the registry.
    pub fn open(registry: &Registry, name: &str, config: BaizeConfig) -> Result<Self, RestoreError> {
        let variant = registry
            .get(name)
            .ok_or_else(|| RestoreError::UnknownVariant(name.to_string()))?;
        Ok(Self::new(name, variant, config))
    }

    // === Accessors ===

    #[must_use]
    pub fn variant_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn variant(&self) -> &dyn Variant {
        self.variant.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &BaizeConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn recycles(&self) -> u32 {
        self.board.recycles()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Drain the queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // === Queries ===

    /// Start indices of the tails of `pile` that may be picked up.
    pub fn movable_tails(&self, pile: PileId) -> Result<Tails, MoveError> {
        let p = self.board.get(pile)?;
        Ok(p.category().movable_tails(self.variant.as_ref(), &self.board, p))
    }

    /// Would moving the tail of `src` at `index` onto `dst` be legal?
    pub fn can_move(&self, src: PileId, index: usize, dst: PileId) -> Result<(), MoveError> {
        check_move(self.variant.as_ref(), &self.board, src, index, dst)
    }

    /// Outline descriptor for a pile, whether or not it is empty.
    pub fn placeholder(&self, pile: PileId) -> Result<Placeholder, MoveError> {
        let p = self.board.get(pile)?;
        Ok(p.category().placeholder(p))
    }

    /// Out-of-order adjacent pairs across all tableaux.
    #[must_use]
    pub fn unsorted_pairs(&self) -> usize {
        self.board
            .tableaux()
            .iter()
            .filter_map(|&t| self.board.pile(t))
            .map(|p| self.variant.unsorted_pairs(p))
            .sum()
    }

    /// True when every pile is in order under its own rule, so the game
    /// could be finished by collecting.
    #[must_use]
    pub fn conformant(&self) -> bool {
        self.board
            .piles()
            .iter()
            .all(|p| p.category().conformant(self.variant.as_ref(), p))
    }

    /// Share of the cards already on Foundations or Discards, 0..=100.
    ///
    /// Display only; `is_won` is authoritative.
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        let total = self.board.total_cards();
        if total == 0 {
            return 0;
        }
        let home: usize = self
            .board
            .foundations()
            .iter()
            .chain(self.board.discards())
            .map(|&p| self.board.len(p))
            .sum();
        (home * 100 / total) as u8
    }

    // === Actions ===

    /// Move the tail of `src` starting at `index` onto `dst`.
    ///
    /// Returns the number of cards moved. Dragging the Stock's top card to
    /// the Waste is a one-card draw, allowed only in games that draw one.
    pub fn move_tail(&mut self, src: PileId, index: usize, dst: PileId) -> Result<usize, MoveError> {
        self.transact(
            "move",
            |variant, board| {
                check_move(variant, board, src, index, dst)?;
                Ok(relocate(board, src, index, dst))
            },
            |&count| Some(Notice::CardsMoved { src, dst, count }),
        )
    }

    /// Move the top card of `src` onto `dst`.
    pub fn move_card(&mut self, src: PileId, dst: PileId) -> Result<CardId, MoveError> {
        let top = self.board.get(src)?.len().checked_sub(1).ok_or(MoveError::NoSuchCard(src, 0))?;
        let id = self.board.cards(src)[top].id();
        self.move_tail(src, top, dst)?;
        Ok(id)
    }

    /// Tap the card at `index` of `pile`. Tapping an empty pile is a pile
    /// tap.
    pub fn tap(&mut self, pile: PileId, index: usize) -> Result<(), MoveError> {
        let p = self.board.get(pile)?;
        if p.is_empty() {
            return self.pile_tap(pile);
        }
        // any tap on the Stock deals, wherever it lands
        if index >= p.len() && p.category() != Category::Stock {
            return Err(MoveError::NoSuchCard(pile, index));
        }
        self.transact("tap", |variant, board| variant.tail_tapped(board, pile, index), |_| None)
    }

    /// Tap a pile with no card under the pointer.
    pub fn pile_tap(&mut self, pile: PileId) -> Result<(), MoveError> {
        self.board.get(pile)?;
        self.transact("pile tap", |variant, board| variant.pile_tapped(board, pile), |_| None)
    }

    /// Return every Waste card to the Stock, spending one recycle.
    ///
    /// Returns the recycles left.
    pub fn recycle_waste_to_stock(&mut self) -> Result<u32, MoveError> {
        self.transact("recycle", |_, board| board.recycle_waste_to_stock(), |_| None)
    }

    /// Send every card a Foundation (or Discard) will take home, repeatedly,
    /// as one undoable action. Returns the number of moves made.
    pub fn collect(&mut self) -> Result<usize, MoveError> {
        self.transact("collect", |variant, board| Ok(collect_into(variant, board)), |_| None)
    }

    /// Put the board back as it was before the last action.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let state = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.board.apply(&state);
        self.enforce_invariants();
        self.won = self.variant.complete(&self.board);
        debug!("{}: undo, {} left", self.name, self.history.len());
        Ok(())
    }

    /// Deal a fresh game of the same variant with the next session seed.
    pub fn new_deal(&mut self) {
        let seed = self.rng.next_seed();
        self.redeal(seed);
    }

    /// Deal the current game again from the start.
    pub fn restart(&mut self) {
        self.redeal(self.seed);
    }

    // === Persistence ===

    #[must_use]
    pub fn snapshot(&self) -> SavedBaize {
        SavedBaize {
            variant: self.name.clone(),
            seed: self.seed,
            rng: self.rng.state(),
            state: self.board.capture(),
        }
    }

    /// Rebuild a session from a saved game.
    ///
    /// The saved piles must match the variant's layout and hold exactly one
    /// full deal.
    pub fn restore(registry: &Registry, saved: SavedBaize, config: BaizeConfig) -> Result<Self, RestoreError> {
        let variant = registry.get(&saved.variant).ok_or_else(|| {
            warn!("restore: unknown variant {:?}", saved.variant);
            RestoreError::UnknownVariant(saved.variant.clone())
        })?;

        let mut board = Board::new();
        variant.build_piles(&mut board);
        let expected = board.piles().len();
        let found = saved.state.piles.len();
        if expected != found {
            warn!("restore: {} lays out {} piles, saved game has {}", saved.variant, expected, found);
            return Err(RestoreError::PileCount { expected, found });
        }

        let mut deal = CardId::full_deal(variant.packs(), variant.suits());
        let mut held: Vec<CardId> = saved
            .state
            .piles
            .iter()
            .flat_map(|p| p.cards.iter().map(|&(id, _)| id))
            .collect();
        deal.sort_unstable();
        held.sort_unstable();
        if deal != held {
            warn!("restore: {} card set does not match", saved.variant);
            return Err(RestoreError::CardSet);
        }

        board.load_stock(deal);
        board.apply(&saved.state);
        if let Err(violation) = board.check_invariants() {
            warn!("restore: {}", violation);
            return Err(RestoreError::CardSet);
        }

        let won = variant.complete(&board);
        info!("{}: restored, seed {}", saved.variant, saved.seed);
        Ok(Self {
            name: saved.variant,
            variant,
            board,
            rng: DealRng::from_state(&saved.rng),
            seed: saved.seed,
            history: History::new(config.history_limit),
            config,
            notices: Vec::new(),
            won,
        })
    }

    // === Internals ===

    fn redeal(&mut self, seed: u64) {
        self.board = deal(self.variant.as_ref(), seed);
        self.seed = seed;
        self.history.clear();
        self.notices.clear();
        self.enforce_invariants();
        self.won = self.variant.complete(&self.board);
        info!("{}: new deal, seed {}", self.name, seed);
    }

    /// Run `action` as one undoable step.
    ///
    /// On error the board is restored and nothing is recorded. An action
    /// that leaves the board unchanged is not recorded either.
    fn transact<T>(
        &mut self,
        what: &str,
        action: impl FnOnce(&dyn Variant, &mut Board) -> Result<T, MoveError>,
        notice: impl FnOnce(&T) -> Option<Notice>,
    ) -> Result<T, MoveError> {
        if self.won {
            return Err(MoveError::GameOver);
        }
        let variant = Arc::clone(&self.variant);
        let before = self.board.capture();

        let value = match action(variant.as_ref(), &mut self.board) {
            Ok(value) => value,
            Err(e) => {
                self.board.apply(&before);
                debug!("{}: {} rejected: {}", self.name, what, e);
                return Err(e);
            }
        };
        if self.board.capture() == before {
            return Ok(value);
        }

        settle(variant.as_ref(), &mut self.board);
        if self.config.auto_collect {
            collect_into(variant.as_ref(), &mut self.board);
        }
        self.enforce_invariants();
        debug!("{}: {} committed", self.name, what);

        if let Some(n) = notice(&value) {
            self.notices.push(n);
        }
        let recycles = self.board.recycles();
        if recycles < before.recycles {
            self.notices.extend(Notice::after_recycle(recycles));
        }
        self.history.push(before);

        if variant.complete(&self.board) {
            self.won = true;
            self.notices.push(Notice::GameWon);
            info!("{}: game won (seed {})", self.name, self.seed);
        }
        Ok(value)
    }

    fn enforce_invariants(&self) {
        if let Err(violation) = self.board.check_invariants() {
            error!("{}: board invariant broken: {}", self.name, violation);
            panic!("board invariant broken: {}", violation);
        }
    }
}

/// Build and deal a board for `variant`.
fn deal(variant: &dyn Variant, seed: u64) -> Board {
    let mut board = Board::new();
    variant.build_piles(&mut board);
    let mut ids = CardId::full_deal(variant.packs(), variant.suits());
    DealRng::new(seed).shuffle(&mut ids);
    board.load_stock(ids);
    variant.start_game(&mut board);
    board.set_recycles(variant.recycles());
    board
}

/// Validate a drag without touching the board.
fn check_move(variant: &dyn Variant, board: &Board, src: PileId, index: usize, dst: PileId) -> Result<(), MoveError> {
    if src == dst {
        return Err(MoveError::SamePile);
    }
    let from = board.get(src)?;
    let to = board.get(dst)?;
    let tail = from.tail(index).ok_or(MoveError::NoSuchCard(src, index))?;
    let category = from.category();

    if category == Category::Stock {
        // only the top card can be drawn, and only when a tap would draw one
        if tail.len() != 1 || variant.draw() != 1 {
            return Err(MoveError::NotMovable);
        }
    } else if !category.movable_tails(variant, board, from).contains(&index) {
        if tail.iter().any(|c| c.prone()) {
            return Err(MoveError::FaceDown);
        }
        return match from.move_type() {
            MoveType::None => Err(MoveError::CannotMoveFrom(category)),
            MoveType::OnePlus => variant.tail_move_error(board, src, tail).and(Err(MoveError::NotMovable)),
            MoveType::One | MoveType::Any => Err(MoveError::NotMovable),
        };
    }

    variant.tail_move_error(board, src, tail)?;
    to.category().can_accept_tail(variant, board, dst, tail)
}

/// Carry out a validated drag. Returns the number of cards moved.
fn relocate(board: &mut Board, src: PileId, index: usize, dst: PileId) -> usize {
    if board.category(src) == Some(Category::Stock) {
        usize::from(board.move_card(src, dst).is_some())
    } else {
        board.move_tail(src, index, dst)
    }
}

/// Bookkeeping after every committed action.
fn settle(variant: &dyn Variant, board: &mut Board) {
    for t in board.tableaux().to_vec() {
        board.flip_up_exposed(t);
    }
    variant.after_move(board);
}

/// Move everything the Foundations or Discards accept, until nothing moves.
fn collect_into(variant: &dyn Variant, board: &mut Board) -> usize {
    let mut moves = 0;
    loop {
        let mut moved = false;
        for src in (0..board.piles().len()).map(|i| PileId::new(i as u16)) {
            let len = board.len(src);
            let run = discard_size(board);
            let mut candidates = vec![len.saturating_sub(1)];
            if run > 1 && len >= run {
                candidates.push(len - run);
            }
            for index in candidates {
                if len > 0 && send_home(variant, board, src, index).is_ok() {
                    settle(variant, board);
                    moves += 1;
                    moved = true;
                    break;
                }
            }
        }
        if !moved {
            return moves;
        }
    }
}
