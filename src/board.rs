//! The board: cell collection, sizing metadata and play state, plus every
//! operation of the engine.
//!
//! All operations are pure: they read one board snapshot and return a new
//! board, never mutating the input. The caller (the rendering collaborator)
//! holds the current board and replaces it wholesale after each command,
//! which keeps the generation counter trivially monotonic and makes undo a
//! matter of keeping old values around.

use rand::Rng;

use crate::cell::Cell;
use crate::error::LifeError;
use crate::rule::{next_cell_state, RuleVariant};

/// Playback speed selector. The concrete tick intervals live with the
/// scheduler; the engine only carries the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
}

impl Speed {
    /// One notch faster, saturating at `Double`.
    pub fn faster(self) -> Speed {
        match self {
            Speed::Half => Speed::Normal,
            _ => Speed::Double,
        }
    }

    /// One notch slower, saturating at `Half`.
    pub fn slower(self) -> Speed {
        match self {
            Speed::Double => Speed::Normal,
            _ => Speed::Half,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
        }
    }
}

/// Named board sizes. Each preset fixes a `(width, height, scale)` triple in
/// pixels; `Custom` carries whatever dimensions the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
    Custom,
}

impl SizePreset {
    /// The `(width, height, scale)` triple for a named preset, or `None` for
    /// `Custom` which has no fixed dimensions.
    pub fn dimensions(self) -> Option<(u32, u32, u32)> {
        match self {
            SizePreset::Small => Some((300, 300, 30)),
            SizePreset::Medium => Some((600, 400, 20)),
            SizePreset::Large => Some((900, 600, 15)),
            SizePreset::Custom => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizePreset::Small => "Small",
            SizePreset::Medium => "Medium",
            SizePreset::Large => "Large",
            SizePreset::Custom => "Custom",
        }
    }
}

/// One immutable snapshot of the simulation.
///
/// The cell collection is a flat row-major vector indexed by `y * cols + x`,
/// holding exactly one cell per coordinate of `[0, cols) x [0, rows)` with
/// `cols = width / scale` and `rows = height / scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u32,
    height: u32,
    scale: u32,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    counter: u64,
    is_playing: bool,
    speed: Speed,
    preset: SizePreset,
    rule: RuleVariant,
}

impl Board {
    /// Creates an all-dead board for a named preset.
    ///
    /// # Errors
    ///
    /// `LifeError::Configuration` if `Custom` is requested here; custom
    /// boards need explicit dimensions via [`Board::with_dimensions`].
    pub fn new(preset: SizePreset) -> Result<Board, LifeError> {
        match preset.dimensions() {
            Some((width, height, scale)) => Board::build(
                width,
                height,
                scale,
                preset,
                Speed::default(),
                RuleVariant::default(),
            ),
            None => Err(LifeError::Configuration {
                width: 0,
                height: 0,
                scale: 0,
                reason: "custom boards require explicit width, height and scale",
            }),
        }
    }

    /// Creates an all-dead board with explicit pixel dimensions.
    ///
    /// # Errors
    ///
    /// `LifeError::Configuration` if any dimension is zero or `scale` does
    /// not evenly divide `width` and `height`.
    pub fn with_dimensions(width: u32, height: u32, scale: u32) -> Result<Board, LifeError> {
        Board::build(
            width,
            height,
            scale,
            SizePreset::Custom,
            Speed::default(),
            RuleVariant::default(),
        )
    }

    fn build(
        width: u32,
        height: u32,
        scale: u32,
        preset: SizePreset,
        speed: Speed,
        rule: RuleVariant,
    ) -> Result<Board, LifeError> {
        if width == 0 || height == 0 || scale == 0 {
            return Err(LifeError::Configuration {
                width,
                height,
                scale,
                reason: "all dimensions must be positive",
            });
        }
        if width % scale != 0 || height % scale != 0 {
            return Err(LifeError::Configuration {
                width,
                height,
                scale,
                reason: "scale must evenly divide width and height",
            });
        }

        let cols = (width / scale) as usize;
        let rows = (height / scale) as usize;
        let cells = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Cell::dead(x, y)))
            .collect();

        Ok(Board {
            width,
            height,
            scale,
            cols,
            rows,
            cells,
            counter: 0,
            is_playing: false,
            speed,
            preset,
            rule,
        })
    }

    /// Board width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per cell; only the rendering collaborator cares.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Generation number, starting at 0.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn preset(&self) -> SizePreset {
        self.preset
    }

    pub fn rule(&self) -> RuleVariant {
        self.rule
    }

    fn index_checked(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x < self.cols && y < self.rows {
            Ok(y * self.cols + x)
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Same board with a fresh cell collection and counter.
    fn with_cells(&self, cells: Vec<Cell>, counter: u64) -> Board {
        Board {
            cells,
            counter,
            ..self.metadata()
        }
    }

    /// Everything but the cell collection, for struct-update syntax.
    fn metadata(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            scale: self.scale,
            cols: self.cols,
            rows: self.rows,
            cells: Vec::new(),
            counter: self.counter,
            is_playing: self.is_playing,
            speed: self.speed,
            preset: self.preset,
            rule: self.rule,
        }
    }

    /// Bounds-checked cell lookup.
    ///
    /// # Errors
    ///
    /// `LifeError::OutOfBounds` if `(x, y)` lies outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, LifeError> {
        let idx = self.index_checked(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Visits every cell exactly once in row-major order. The order is
    /// stable across calls on the same board.
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Maps a pixel position to the grid cell under it, or `None` when the
    /// pixel lies outside the board rectangle. This is the inverse of the
    /// toggle command's input.
    pub fn cell_at_pixel(&self, pixel_x: u32, pixel_y: u32) -> Option<(usize, usize)> {
        (pixel_x < self.width && pixel_y < self.height).then(|| {
            (
                (pixel_x / self.scale) as usize,
                (pixel_y / self.scale) as usize,
            )
        })
    }

    /// Number of living cells.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|cell| cell.alive).count() as u64
    }

    /// Counts the live neighbors of `(x, y)` on the toroidal grid.
    ///
    /// The 8 surrounding offsets wrap on each axis independently, so edge
    /// cells treat the opposite edge as adjacent.
    ///
    /// # Errors
    ///
    /// `LifeError::OutOfBounds` if `(x, y)` lies outside the grid.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u8, LifeError> {
        self.index_checked(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = (x as i32 + dx).rem_euclid(self.cols as i32) as usize;
                let ny = (y as i32 + dy).rem_euclid(self.rows as i32) as usize;

                if self.cells[ny * self.cols + nx].alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the simulation by one generation.
    ///
    /// Every neighbor count reads this (pre-advance) board, so the whole
    /// grid updates simultaneously; sequential in-place mutation would make
    /// the outcome depend on visit order. Returns a new board with
    /// `counter + 1` and all other fields unchanged.
    pub fn advance(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                let live_neighbors = self.live_neighbors(cell.x, cell.y);
                next_cell_state(cell, live_neighbors, self.rule)
            })
            .collect();
        self.with_cells(cells, self.counter + 1)
    }

    /// Flips the cell at `(x, y)`: a dead cell becomes alive at age 1, a
    /// live cell dies and its age resets to 0. Everything else, including
    /// the generation counter, is unchanged.
    ///
    /// # Errors
    ///
    /// `LifeError::OutOfBounds` if `(x, y)` lies outside the grid; no state
    /// changes on failure.
    pub fn toggle(&self, x: usize, y: usize) -> Result<Board, LifeError> {
        let idx = self.index_checked(x, y)?;
        let mut cells = self.cells.clone();
        cells[idx] = if cells[idx].alive {
            Cell::dead(x, y)
        } else {
            Cell::born(x, y)
        };
        Ok(self.with_cells(cells, self.counter))
    }

    /// Re-seeds the whole grid: every cell is independently alive with
    /// probability 0.5 (at age 1) or dead. Resets the generation counter
    /// to 0.
    ///
    /// The generator is injected so tests can seed a deterministic
    /// `StdRng`; interactive callers pass `rand::thread_rng()`.
    pub fn seed_random<R: Rng>(&self, rng: &mut R) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                if rng.gen_bool(0.5) {
                    Cell::born(cell.x, cell.y)
                } else {
                    Cell::dead(cell.x, cell.y)
                }
            })
            .collect();
        self.with_cells(cells, 0)
    }

    /// Replaces the grid with a fresh all-dead one for a named preset.
    ///
    /// The previous cell state is discarded entirely and the counter resets
    /// to 0. Playback is stopped so a running timer never races the swap;
    /// the speed and rule selections carry over.
    ///
    /// # Errors
    ///
    /// `LifeError::Configuration` for `Custom` (use
    /// [`Board::resize_custom`]).
    pub fn resize(&self, preset: SizePreset) -> Result<Board, LifeError> {
        match preset.dimensions() {
            Some((width, height, scale)) => {
                Board::build(width, height, scale, preset, self.speed, self.rule)
            }
            None => Err(LifeError::Configuration {
                width: 0,
                height: 0,
                scale: 0,
                reason: "custom resize requires explicit width, height and scale",
            }),
        }
    }

    /// Replaces the grid with a fresh all-dead one of explicit dimensions;
    /// otherwise identical to [`Board::resize`].
    pub fn resize_custom(&self, width: u32, height: u32, scale: u32) -> Result<Board, LifeError> {
        Board::build(width, height, scale, SizePreset::Custom, self.speed, self.rule)
    }

    /// Same board with a different playback speed; cells untouched.
    pub fn set_speed(&self, speed: Speed) -> Board {
        Board {
            speed,
            ..self.clone()
        }
    }

    /// Same board with playback switched on or off; cells untouched.
    pub fn set_playing(&self, playing: bool) -> Board {
        Board {
            is_playing: playing,
            ..self.clone()
        }
    }

    pub fn play(&self) -> Board {
        self.set_playing(true)
    }

    pub fn pause(&self) -> Board {
        self.set_playing(false)
    }

    /// Same board under a different transition rule; cells untouched.
    pub fn set_rule(&self, rule: RuleVariant) -> Board {
        Board {
            rule,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small() -> Board {
        Board::new(SizePreset::Small).unwrap()
    }

    #[test]
    fn preset_boards_start_dead_and_paused() {
        let board = small();
        assert_eq!(
            (board.width(), board.height(), board.scale()),
            (300, 300, 30)
        );
        assert_eq!((board.cols(), board.rows()), (10, 10));
        assert_eq!(board.counter(), 0);
        assert!(!board.is_playing());
        assert_eq!(board.speed(), Speed::Normal);
        assert_eq!(board.population(), 0);
        assert!(board.iter_cells().all(|cell| !cell.alive && cell.age == 0));
    }

    #[test]
    fn custom_preset_without_dimensions_is_a_configuration_error() {
        assert!(matches!(
            Board::new(SizePreset::Custom),
            Err(LifeError::Configuration { .. })
        ));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (w, h, s) in [(0, 300, 30), (300, 0, 30), (300, 300, 0)] {
            assert!(matches!(
                Board::with_dimensions(w, h, s),
                Err(LifeError::Configuration { .. })
            ));
        }
    }

    #[test]
    fn non_divisible_scale_is_rejected() {
        assert!(matches!(
            Board::with_dimensions(300, 300, 7),
            Err(LifeError::Configuration { .. })
        ));
        assert!(matches!(
            Board::with_dimensions(300, 310, 30),
            Err(LifeError::Configuration { .. })
        ));
    }

    #[test]
    fn iteration_is_row_major_and_covers_every_cell_once() {
        let board = Board::with_dimensions(120, 90, 30).unwrap();
        let visited: Vec<(usize, usize)> =
            board.iter_cells().map(|cell| (cell.x, cell.y)).collect();

        assert_eq!(visited.len(), board.cols() * board.rows());
        let expected: Vec<(usize, usize)> = (0..board.rows())
            .flat_map(|y| (0..board.cols()).map(move |x| (x, y)))
            .collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn toggle_births_then_kills() {
        let board = small();
        let toggled = board.toggle(4, 5).unwrap();
        let cell = toggled.cell(4, 5).unwrap();
        assert!(cell.alive);
        assert_eq!(cell.age, 1);
        assert_eq!(toggled.counter(), 0);

        let back = toggled.toggle(4, 5).unwrap();
        let cell = back.cell(4, 5).unwrap();
        assert!(!cell.alive);
        assert_eq!(cell.age, 0);
        assert_eq!(back.population(), 0);
    }

    #[test]
    fn toggle_out_of_bounds_fails_without_touching_state() {
        let board = small();
        let before = board.clone();
        assert_eq!(
            board.toggle(10, 0),
            Err(LifeError::OutOfBounds {
                x: 10,
                y: 0,
                cols: 10,
                rows: 10
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn neighbor_counts_wrap_toroidally() {
        let board = small().toggle(0, 0).unwrap();
        // The live corner is adjacent, across the wrap, to all three opposite corners.
        assert_eq!(board.count_live_neighbors(9, 9).unwrap(), 1);
        assert_eq!(board.count_live_neighbors(9, 0).unwrap(), 1);
        assert_eq!(board.count_live_neighbors(0, 9).unwrap(), 1);
        assert_eq!(board.count_live_neighbors(5, 5).unwrap(), 0);
        // A cell does not count itself.
        assert_eq!(board.count_live_neighbors(0, 0).unwrap(), 0);
    }

    #[test]
    fn neighbor_count_rejects_out_of_bounds_coordinates() {
        assert!(matches!(
            small().count_live_neighbors(0, 10),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn advance_increments_counter_and_leaves_input_untouched() {
        let board = small().toggle(1, 1).unwrap().toggle(2, 2).unwrap();
        let snapshot = board.clone();

        let next = board.advance();
        assert_eq!(next.counter(), board.counter() + 1);
        assert_eq!(board, snapshot);

        // Lone pair dies of underpopulation (diagonal cells have 1 neighbor each).
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn advance_on_an_empty_board_stays_empty() {
        let next = small().advance();
        assert_eq!(next.population(), 0);
        assert_eq!(next.counter(), 1);
    }

    #[test]
    fn seeding_is_deterministic_per_seed_and_resets_the_counter() {
        let board = small().advance().advance();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let seeded_a = board.seed_random(&mut rng_a);
        let seeded_b = board.seed_random(&mut rng_b);
        assert_eq!(seeded_a, seeded_b);
        assert_eq!(seeded_a.counter(), 0);
        assert!(seeded_a
            .iter_cells()
            .all(|cell| cell.age == u32::from(cell.alive)));

        let mut rng_c = StdRng::seed_from_u64(7);
        assert_ne!(seeded_a.cells, board.seed_random(&mut rng_c).cells);
    }

    #[test]
    fn resize_returns_a_fresh_dead_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = small().seed_random(&mut rng).advance().play();

        let resized = board.resize(SizePreset::Large).unwrap();
        assert_eq!(
            (resized.width(), resized.height(), resized.scale()),
            (900, 600, 15)
        );
        assert_eq!((resized.cols(), resized.rows()), (60, 40));
        assert_eq!(resized.counter(), 0);
        assert_eq!(resized.population(), 0);
        assert!(!resized.is_playing());
        assert_eq!(resized.preset(), SizePreset::Large);
        // Playback preferences carry over.
        assert_eq!(resized.speed(), board.speed());
        assert_eq!(resized.rule(), board.rule());
    }

    #[test]
    fn resize_to_custom_requires_explicit_dimensions() {
        assert!(matches!(
            small().resize(SizePreset::Custom),
            Err(LifeError::Configuration { .. })
        ));
        let resized = small().resize_custom(200, 100, 10).unwrap();
        assert_eq!((resized.cols(), resized.rows()), (20, 10));
        assert_eq!(resized.preset(), SizePreset::Custom);
    }

    #[test]
    fn speed_and_playing_changes_leave_cells_alone() {
        let board = small().toggle(3, 3).unwrap();

        let faster = board.set_speed(Speed::Double);
        assert_eq!(faster.speed(), Speed::Double);
        assert_eq!(faster.cells, board.cells);
        assert_eq!(faster.counter(), board.counter());

        let playing = board.play();
        assert!(playing.is_playing());
        assert_eq!(playing.cells, board.cells);
        assert!(!playing.pause().is_playing());
    }

    #[test]
    fn speed_notches_saturate() {
        assert_eq!(Speed::Half.faster(), Speed::Normal);
        assert_eq!(Speed::Normal.faster(), Speed::Double);
        assert_eq!(Speed::Double.faster(), Speed::Double);
        assert_eq!(Speed::Double.slower(), Speed::Normal);
        assert_eq!(Speed::Normal.slower(), Speed::Half);
        assert_eq!(Speed::Half.slower(), Speed::Half);
    }

    #[test]
    fn pixel_lookup_is_the_inverse_of_toggle_input() {
        let board = small(); // 300x300 at scale 30
        assert_eq!(board.cell_at_pixel(0, 0), Some((0, 0)));
        assert_eq!(board.cell_at_pixel(29, 29), Some((0, 0)));
        assert_eq!(board.cell_at_pixel(30, 0), Some((1, 0)));
        assert_eq!(board.cell_at_pixel(299, 299), Some((9, 9)));
        assert_eq!(board.cell_at_pixel(300, 0), None);
        assert_eq!(board.cell_at_pixel(0, 300), None);
    }
}
