//! Catalog of named variants and picker groups.
//!
//! The `Registry` maps a display name to one shared, immutable `Variant`.
//! Group names start with `"> "` so a picker can list them ahead of the
//! games; `"> All"` is computed from the catalog rather than stored.
//!
//! ## Example
//!
//! ```
//! use rust_patience::variants::Registry;
//!
//! let registry = Registry::standard();
//! let klondike = registry.get("Klondike").unwrap();
//! assert_eq!(klondike.draw(), 1);
//!
//! assert!(registry.variant_names("> Spider").contains(&"Spider One Suit"));
//! assert_eq!(registry.group_names()[0], "> All");
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::compare::Compare;
use crate::piles::MoveType;

use super::{Canfield, EightOff, FortyThieves, Freecell, Klondike, SimpleSimon, Spider, Variant, Yukon};

/// Name of the computed group holding every variant.
pub const ALL_GROUP: &str = "> All";

const GROUPS: &[(&str, &[&str])] = &[
    ("> Canfield", &["Canfield", "Storehouse"]),
    ("> Easier", &["Lucas", "Spider One Suit"]),
    ("> Harder", &["Forty Thieves", "Spider Four Suits"]),
    (
        "> Forty Thieves",
        &[
            "Forty Thieves",
            "Number Ten",
            "Red and Black",
            "Indian",
            "Rank and File",
            "Sixty Thieves",
            "Josephine",
            "Limited",
            "Forty and Eight",
            "Lucas",
            "Busy Aces",
            "Maria",
            "Streets",
        ],
    ),
    ("> Freecell", &["Baker's Game", "Blind Freecell", "Freecell", "Eight Off"]),
    ("> Klondike", &["Klondike", "Klondike Draw Three", "Thoughtful"]),
    ("> People", &["Josephine", "Maria", "Simple Simon", "Baker's Game"]),
    ("> Places", &["Yukon", "Klondike"]),
    ("> Puzzlers", &["Simple Simon", "Freecell"]),
    ("> Spider", &["Spider One Suit", "Spider Two Suits", "Spider Four Suits"]),
    ("> Yukon", &["Yukon", "Yukon Cells"]),
];

/// Registry of named variants.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    variants: FxHashMap<String, Arc<dyn Variant>>,
    groups: FxHashMap<String, Vec<String>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut r = Self::new();

        r.register("Klondike", Klondike::new());
        r.register("Klondike Draw Three", Klondike::new().with_draw(3).with_recycles(9));
        r.register("Thoughtful", Klondike::new().with_recycles(32767).with_thoughtful(true));

        r.register("Freecell", Freecell::new());
        r.register(
            "Baker's Game",
            Freecell::new()
                .with_wikipedia("https://en.wikipedia.org/wiki/Baker%27s_Game")
                .with_card_colors(4)
                .with_tab_compare(Compare::DownSuit),
        );
        r.register("Blind Freecell", Freecell::new().with_blind(true));
        r.register("Eight Off", EightOff);

        r.register("Forty Thieves", FortyThieves::new());
        r.register("Josephine", FortyThieves::new().with_move_type(MoveType::Any));
        r.register(
            "Rank and File",
            FortyThieves::new()
                .with_card_colors(2)
                .with_prone_rows(&[0, 1, 2])
                .with_tab_compare(Compare::DownAltColor)
                .with_move_type(MoveType::Any),
        );
        r.register(
            "Indian",
            FortyThieves::new()
                .with_cards_per_tab(3)
                .with_prone_rows(&[0])
                .with_tab_compare(Compare::DownOtherSuit),
        );
        r.register(
            "Streets",
            FortyThieves::new()
                .with_card_colors(2)
                .with_tab_compare(Compare::DownAltColor),
        );
        r.register(
            "Number Ten",
            FortyThieves::new()
                .with_card_colors(2)
                .with_prone_rows(&[0, 1])
                .with_tab_compare(Compare::DownAltColor)
                .with_move_type(MoveType::Any),
        );
        r.register(
            "Limited",
            FortyThieves::new()
                .with_founds(4..=11)
                .with_tabs(0..=11)
                .with_cards_per_tab(3),
        );
        r.register(
            "Forty and Eight",
            FortyThieves::new()
                .with_tabs(3..=10)
                .with_cards_per_tab(5)
                .with_recycles(1),
        );
        r.register(
            "Red and Black",
            FortyThieves::new()
                .with_card_colors(2)
                .with_tabs(3..=10)
                .with_tab_compare(Compare::DownAltColor),
        );
        r.register(
            "Lucas",
            FortyThieves::new()
                .with_founds(5..=12)
                .with_tabs(0..=12)
                .with_cards_per_tab(3)
                .with_deal_aces(true),
        );
        r.register(
            "Busy Aces",
            FortyThieves::new()
                .with_founds(4..=11)
                .with_tabs(0..=11)
                .with_cards_per_tab(1),
        );
        r.register(
            "Maria",
            FortyThieves::new()
                .with_card_colors(2)
                .with_tabs(2..=10)
                .with_tab_compare(Compare::DownAltColor),
        );
        r.register(
            "Sixty Thieves",
            FortyThieves::new()
                .with_packs(3)
                .with_founds(3..=14)
                .with_tabs(3..=14)
                .with_cards_per_tab(5),
        );

        r.register("Spider One Suit", Spider::one_suit());
        r.register("Spider Two Suits", Spider::two_suits());
        r.register("Spider Four Suits", Spider::four_suits());
        r.register("Simple Simon", SimpleSimon);

        r.register("Canfield", Canfield::new());
        r.register("Storehouse", Canfield::storehouse());

        r.register("Yukon", Yukon::new());
        r.register("Yukon Cells", Yukon::new().with_extra_cells(2));

        for (group, names) in GROUPS {
            r.add_group(group, names.iter().copied());
        }
        r
    }

    /// Register a variant under a display name.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, name: impl Into<String>, variant: impl Variant + 'static) {
        let name = name.into();
        if self.variants.contains_key(&name) {
            panic!("Variant {:?} already registered", name);
        }
        self.variants.insert(name, Arc::new(variant));
    }

    /// Add (or replace) a picker group.
    pub fn add_group<'a>(&mut self, group: &str, names: impl IntoIterator<Item = &'a str>) {
        self.groups
            .insert(group.to_string(), names.into_iter().map(str::to_string).collect());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Variant>> {
        self.variants.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Alpha-sorted group names, including `"> All"`.
    #[must_use]
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.push(ALL_GROUP);
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Alpha-sorted variant names in a group; empty for an unknown group.
    #[must_use]
    pub fn variant_names(&self, group: &str) -> Vec<&str> {
        let mut names: Vec<&str> = if group == ALL_GROUP {
            self.variants.keys().map(String::as_str).collect()
        } else {
            self.groups
                .get(group)
                .map(|g| g.iter().map(String::as_str).collect())
                .unwrap_or_default()
        };
        names.sort_unstable();
        names
    }
}
