//! Token generation: id sources and the factory that spawns fresh tokens.
//!
//! Ids are presentation-only, so they come from an injected [`IdSource`]
//! that tests can replace without touching any board logic.

use crate::config::Palette;
use crate::rng::SimpleRng;
use crate::types::{Color, Token, TokenId};

/// Source of locally unique token ids.
pub trait IdSource {
    fn next_id(&mut self) -> TokenId;
}

/// Monotonic counter, the default id source.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Id the next call will hand out
    pub fn peek(&self) -> TokenId {
        TokenId(self.next)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TokenId {
        let id = TokenId(self.next);
        self.next += 1;
        id
    }
}

impl<F> IdSource for F
where
    F: FnMut() -> TokenId,
{
    fn next_id(&mut self) -> TokenId {
        self()
    }
}

/// Spawns fresh tokens with random palette colors.
#[derive(Debug, Clone)]
pub struct TokenFactory<I = SequentialIds> {
    rng: SimpleRng,
    ids: I,
    palette: Palette,
}

impl TokenFactory<SequentialIds> {
    pub fn new(seed: u32, palette: Palette) -> Self {
        Self::with_ids(seed, palette, SequentialIds::new())
    }
}

impl<I: IdSource> TokenFactory<I> {
    pub fn with_ids(seed: u32, palette: Palette, ids: I) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            ids,
            palette,
        }
    }

    /// A new token of a uniformly random palette color
    pub fn spawn(&mut self) -> Token {
        let color = self.random_color();
        self.spawn_colored(color)
    }

    /// A new token of a caller-chosen color
    pub fn spawn_colored(&mut self, color: Color) -> Token {
        Token::new(self.ids.next_id(), color)
    }

    pub fn random_color(&mut self) -> Color {
        self.palette.pick(&mut self.rng)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    pub fn ids_mut(&mut self) -> &mut I {
        &mut self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next_id(), TokenId(10));
        assert_eq!(ids.next_id(), TokenId(11));
        assert_eq!(ids.peek(), TokenId(12));
    }

    #[test]
    fn closures_are_id_sources() {
        let mut n = 100;
        let mut factory = TokenFactory::with_ids(1, Palette::default(), move || {
            n += 2;
            TokenId(n)
        });
        assert_eq!(factory.spawn().id, TokenId(102));
        assert_eq!(factory.spawn().id, TokenId(104));
    }

    #[test]
    fn spawned_colors_stay_in_palette() {
        let palette = Palette::first(3).unwrap();
        let mut factory = TokenFactory::new(5, palette.clone());
        for _ in 0..300 {
            assert!(palette.contains(factory.spawn().color));
        }
    }

    #[test]
    fn same_seed_spawns_same_tokens() {
        let mut a = TokenFactory::new(77, Palette::default());
        let mut b = TokenFactory::new(77, Palette::default());
        for _ in 0..64 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }
}
