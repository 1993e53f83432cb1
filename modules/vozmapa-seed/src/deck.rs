//! Shuffled template decks.
//!
//! A plain uniform pick repeats stories early, and repeated text on
//! neighboring pins is the quickest way to make the map read as fake. The
//! deck draw guarantees no repeat within a theme until its pool is
//! exhausted, then reshuffles and keeps going.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use vozmapa_world::Theme;

/// Stock story used when a theme has no templates to refill from.
const FALLBACK_STORY: &str = "História única.";

/// Per-theme shuffled draw piles. Draws pop from the pile; an empty pile is
/// refilled from the theme's template pool and reshuffled before popping.
/// The seed pass owns one deck for its whole run.
#[derive(Debug)]
pub struct TemplateDeck {
    decks: HashMap<Theme, Vec<&'static str>>,
}

impl TemplateDeck {
    /// A fresh deck with every theme's pool shuffled and ready to draw.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut decks = HashMap::new();
        for theme in Theme::ALL {
            let mut pile: Vec<&'static str> = theme.templates().to_vec();
            pile.shuffle(rng);
            decks.insert(theme, pile);
        }
        Self { decks }
    }

    /// Draw the next story for `theme`, repeating nothing until the theme's
    /// pool runs dry.
    pub fn draw(&mut self, rng: &mut impl Rng, theme: Theme) -> &'static str {
        let pile = self.decks.entry(theme).or_default();
        if pile.is_empty() {
            refill(rng, pile, theme.templates());
        }
        pile.pop().unwrap_or(FALLBACK_STORY)
    }
}

/// Refill a draw pile from `source` and shuffle it. An empty source leaves a
/// single stock story so draws keep producing text instead of failing.
fn refill(rng: &mut impl Rng, pile: &mut Vec<&'static str>, source: &[&'static str]) {
    if source.is_empty() {
        pile.push(FALLBACK_STORY);
        return;
    }
    pile.extend_from_slice(source);
    pile.shuffle(rng);
}
