//! Engine module - board creation and single-step resolution
//!
//! [`Engine`] bundles an [`EngineConfig`] with the [`TokenFactory`] every
//! randomized operation draws from. The pure operations (match detection,
//! swap validation, hint search) stay free functions and are re-exported
//! here for convenience.
//!
//! A caller drives resolution by calling [`Engine::step`] until it reports
//! [`StepOutcome::Stable`], reading each [`ClearReport`] on the way.

use log::{debug, trace, warn};

use crate::clear::{clear_matches, ClearReport, ColorTally};
use crate::config::{ConfigError, EngineConfig};
use crate::factory::{IdSource, SequentialIds, TokenFactory};
use crate::gravity;
use crate::grid::Grid;
use crate::hint::{find_potential_match, has_potential_match};
use crate::matching::{find_matches, has_match};
use crate::shuffle;
use crate::types::Cell;

/// What one call to [`Engine::step`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Runs were found and removed
    Cleared(ClearReport),
    /// Empty cells were filled by gravity and refill
    Refilled,
    /// No move existed, so the grid was reshuffled
    Shuffled,
    /// No runs, no holes and at least one move: nothing to do
    Stable,
}

impl StepOutcome {
    pub fn is_stable(&self) -> bool {
        matches!(self, StepOutcome::Stable)
    }
}

/// Aggregate of a [`Engine::settle`] run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cascade {
    /// Steps taken, not counting the final `Stable`
    pub steps: u32,
    /// Number of clear waves (1 for a plain match, more for cascades)
    pub waves: u32,
    /// Everything cleared across all waves
    pub cleared: ColorTally,
    /// Whether a stalemate shuffle happened
    pub shuffled: bool,
    /// False only when the step bound was hit first
    pub stable: bool,
}

/// Fill a `size x size` grid with random tokens, free of runs and with at
/// least one move.
///
/// Cells inside runs are re-rolled until no run is left. If the result has
/// no move, the shuffle strategy takes over, falling back to the
/// constructive layout when the shuffle could only find a layout with runs.
pub fn create_board<I: IdSource>(
    size: usize,
    factory: &mut TokenFactory<I>,
    shuffle_attempts: u32,
) -> Grid {
    roll_board(size, factory, shuffle_attempts).0
}

/// Which path [`roll_board`] took to a playable grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoardOrigin {
    /// The re-rolled fill already had a move
    Rolled,
    /// The fill was a stalemate and the shuffle result was kept
    Shuffled,
    /// The shuffle result still held a run and was replaced
    Constructive,
}

pub(crate) fn roll_board<I: IdSource>(
    size: usize,
    factory: &mut TokenFactory<I>,
    shuffle_attempts: u32,
) -> (Grid, BoardOrigin) {
    let mut grid = Grid::new(size);
    for index in 0..grid.len() {
        grid.set(index, Cell::Occupied(factory.spawn()));
    }

    let mut rerolls = 0u32;
    loop {
        let matches = find_matches(&grid);
        if matches.is_empty() {
            break;
        }
        rerolls += 1;
        for index in matches {
            grid.set(index, Cell::Occupied(factory.spawn()));
        }
    }
    debug!("created {size}x{size} board after {rerolls} re-roll pass(es)");

    if has_potential_match(&grid) {
        return (grid, BoardOrigin::Rolled);
    }
    debug!("fresh board has no move; shuffling");
    let shuffled = shuffle::shuffle_board(&grid, factory, shuffle_attempts);
    if has_match(&shuffled) {
        debug!("shuffled board still holds a run; using the constructive layout");
        let layout = shuffle::constructive_layout(size, factory);
        return (layout, BoardOrigin::Constructive);
    }
    (shuffled, BoardOrigin::Shuffled)
}

/// Tile-matching engine over an explicit grid value
#[derive(Debug, Clone)]
pub struct Engine<I = SequentialIds> {
    config: EngineConfig,
    factory: TokenFactory<I>,
}

impl Engine<SequentialIds> {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_ids(config, SequentialIds::new())
    }
}

impl<I: IdSource> Engine<I> {
    /// Build an engine with a custom id source
    pub fn with_ids(config: EngineConfig, ids: I) -> Result<Self, ConfigError> {
        config.validate()?;
        let factory = TokenFactory::with_ids(config.seed, config.palette.clone(), ids);
        Ok(Self { config, factory })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn factory_mut(&mut self) -> &mut TokenFactory<I> {
        &mut self.factory
    }

    /// A fresh board: no runs, at least one move
    pub fn create_board(&mut self) -> Grid {
        create_board(
            self.config.grid_size,
            &mut self.factory,
            self.config.shuffle_attempts,
        )
    }

    pub fn apply_gravity_and_refill(&mut self, grid: &mut Grid) -> bool {
        self.check_size(grid);
        gravity::apply_gravity_and_refill(grid, &mut self.factory)
    }

    pub fn shuffle_board(&mut self, grid: &Grid) -> Grid {
        self.check_size(grid);
        shuffle::shuffle_board(grid, &mut self.factory, self.config.shuffle_attempts)
    }

    /// One resolution step: clear runs, else refill holes, else break a
    /// stalemate, else report stable.
    pub fn step(&mut self, grid: &mut Grid) -> StepOutcome {
        self.check_size(grid);

        let matches = find_matches(grid);
        if !matches.is_empty() {
            let report = clear_matches(grid, &matches);
            trace!("step: cleared {} cell(s)", report.len());
            return StepOutcome::Cleared(report);
        }

        if grid.has_empty() {
            gravity::apply_gravity_and_refill(grid, &mut self.factory);
            trace!("step: refilled");
            return StepOutcome::Refilled;
        }

        if find_potential_match(grid).is_none() {
            *grid = shuffle::shuffle_board(grid, &mut self.factory, self.config.shuffle_attempts);
            debug!("step: stalemate, reshuffled");
            return StepOutcome::Shuffled;
        }

        StepOutcome::Stable
    }

    /// Step until stable, bounded by `max_settle_steps`.
    pub fn settle(&mut self, grid: &mut Grid) -> Cascade {
        let mut cascade = Cascade::default();
        while cascade.steps < self.config.max_settle_steps {
            match self.step(grid) {
                StepOutcome::Stable => {
                    cascade.stable = true;
                    return cascade;
                }
                StepOutcome::Cleared(report) => {
                    cascade.waves += 1;
                    cascade.cleared.merge(&report.tally);
                }
                StepOutcome::Refilled => {}
                StepOutcome::Shuffled => cascade.shuffled = true,
            }
            cascade.steps += 1;
        }

        warn!(
            "settle stopped after {} step(s) without reaching a stable grid",
            cascade.steps
        );
        cascade
    }

    /// Whether the grid is in a state `step` would call stable
    pub fn is_stable(&self, grid: &Grid) -> bool {
        !has_match(grid) && grid.is_full() && has_potential_match(grid)
    }

    fn check_size(&self, grid: &Grid) {
        assert_eq!(
            grid.size(),
            self.config.grid_size,
            "grid size does not match the engine configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crate::types::{Color, TokenId};

    fn engine(seed: u32) -> Engine {
        Engine::new(EngineConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let err = Engine::new(EngineConfig::default().with_grid_size(1)).unwrap_err();
        assert!(matches!(err, ConfigError::GridTooSmall { .. }));
    }

    #[test]
    fn created_board_is_stable() {
        for seed in 1..20 {
            let mut e = engine(seed);
            let grid = e.create_board();
            assert_eq!(grid.len(), 64);
            assert!(grid.is_full());
            assert!(find_matches(&grid).is_empty(), "seed {seed}");
            assert!(e.is_stable(&grid), "seed {seed}");
        }
    }

    #[test]
    fn step_clears_then_refills_then_stabilises() {
        let mut e = engine(4);
        let mut grid = e.create_board();
        let hint = find_potential_match(&grid).unwrap();
        grid.swap(hint.swap[0], hint.swap[1]);

        match e.step(&mut grid) {
            StepOutcome::Cleared(report) => {
                let mut cleared: Vec<usize> = report.indices().collect();
                cleared.sort_unstable();
                assert_eq!(cleared, hint.matches);
            }
            other => panic!("expected a clear, got {other:?}"),
        }
        assert_eq!(e.step(&mut grid), StepOutcome::Refilled);
        assert!(grid.is_full());

        let cascade = e.settle(&mut grid);
        assert!(cascade.stable);
        assert!(e.is_stable(&grid));
    }

    #[test]
    fn stalemate_step_shuffles() {
        let config = EngineConfig::default()
            .with_grid_size(4)
            .with_palette(Palette::first(4).unwrap());
        let mut e = Engine::new(config).unwrap();
        let mut grid = Grid::from_rows(
            &["RGBY", "BYRG", "RGBY", "BYRG"],
            &mut SequentialIds::new(),
        );

        assert_eq!(e.step(&mut grid), StepOutcome::Shuffled);
        assert!(find_potential_match(&grid).is_some());
    }

    fn small_board_origins(shuffle_attempts: u32) -> Vec<BoardOrigin> {
        (1..=500)
            .map(|seed| {
                let mut factory = TokenFactory::new(seed, Palette::first(3).unwrap());
                let (grid, origin) = roll_board(3, &mut factory, shuffle_attempts);
                assert!(grid.is_full(), "seed {seed}");
                assert!(!has_match(&grid), "seed {seed}: {:?}", grid.to_rows());
                assert!(has_potential_match(&grid), "seed {seed}: {:?}", grid.to_rows());
                origin
            })
            .collect()
    }

    #[test]
    fn stalemate_fill_is_shuffled_into_a_playable_board() {
        // 3x3 with three colors stalls often enough to reach the shuffle.
        let origins = small_board_origins(0);
        assert!(origins.contains(&BoardOrigin::Rolled));
        assert!(origins.contains(&BoardOrigin::Shuffled));
    }

    #[test]
    fn shuffle_with_runs_falls_back_to_constructive_layout() {
        // A single attempt sometimes only finds a solvable layout with a run.
        let origins = small_board_origins(1);
        assert!(origins.contains(&BoardOrigin::Shuffled));
        assert!(origins.contains(&BoardOrigin::Constructive));
    }

    #[test]
    fn create_board_matches_roll_board() {
        let mut a = TokenFactory::new(9, Palette::first(3).unwrap());
        let mut b = TokenFactory::new(9, Palette::first(3).unwrap());
        assert_eq!(create_board(3, &mut a, 1), roll_board(3, &mut b, 1).0);
    }

    #[test]
    fn custom_id_source_is_used() {
        let mut next = 0u64;
        let mut e = Engine::with_ids(EngineConfig::default(), move || {
            next += 10;
            TokenId(next)
        })
        .unwrap();
        let grid = e.create_board();
        assert!(grid.tokens().all(|t| t.id.0 % 10 == 0));
    }

    #[test]
    fn settle_respects_step_bound() {
        let mut e = Engine::new(EngineConfig::default().with_max_settle_steps(1)).unwrap();
        let mut grid = Grid::from_colors(8, &[Some(Color::Red); 64], &mut SequentialIds::new());
        let cascade = e.settle(&mut grid);
        assert!(!cascade.stable);
        assert_eq!(cascade.steps, 1);
        assert_eq!(cascade.waves, 1);
        assert_eq!(cascade.cleared.get(Color::Red), 64);
    }

    #[test]
    #[should_panic(expected = "does not match the engine configuration")]
    fn foreign_grid_size_panics() {
        let mut e = engine(1);
        let mut grid = Grid::new(5);
        e.step(&mut grid);
    }
}
