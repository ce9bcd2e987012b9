//! The light wall: one bulb per letter, lit one at a time to spell a message.

use crate::constants::WALL_TICK_PERIOD;
use crate::error::WallError;
use fnv::FnvHashMap;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct WallCell {
    pub glyph: char,
    pub color: &'static str,
    pub lit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    /// `since_tick` is the time accumulated toward the next tick.
    Running { since_tick: Duration },
}

pub struct LightWall {
    cells: Vec<WallCell>,
    by_glyph: FnvHashMap<char, usize>,
    message: Vec<char>,
    cursor: usize,
    state: SequencerState,
    period: Duration,
}

impl LightWall {
    pub fn new(message: &str) -> Self {
        Self {
            cells: Vec::new(),
            by_glyph: FnvHashMap::default(),
            message: message.chars().collect(),
            cursor: 0,
            state: SequencerState::Idle,
            period: WALL_TICK_PERIOD,
        }
    }

    /// Rebuild the cells, one per alphabet character, each with a bulb color
    /// drawn uniformly from `palette`. Prior cells are discarded first.
    pub fn build<R: Rng + ?Sized>(
        &mut self,
        alphabet: &str,
        palette: &[&'static str],
        rng: &mut R,
    ) -> Result<(), WallError> {
        if palette.is_empty() {
            return Err(WallError::EmptyPalette);
        }
        self.cells.clear();
        self.by_glyph.clear();
        for glyph in alphabet.chars() {
            let color = palette.choose(rng).copied().ok_or(WallError::EmptyPalette)?;
            self.by_glyph.insert(glyph, self.cells.len());
            self.cells.push(WallCell {
                glyph,
                color,
                lit: false,
            });
        }
        log::info!("[wall] built {} cells", self.cells.len());
        Ok(())
    }

    pub fn cells(&self) -> &[WallCell] {
        &self.cells
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SequencerState::Running { .. })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the lit cell, if any.
    pub fn lit(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.lit)
    }

    /// Move from `Idle` to `Running`. Returns false when already running.
    pub fn start(&mut self) -> bool {
        match self.state {
            SequencerState::Idle => {
                self.state = SequencerState::Running {
                    since_tick: Duration::ZERO,
                };
                log::info!("[wall] light show started");
                true
            }
            SequencerState::Running { .. } => false,
        }
    }

    /// Feed elapsed time. Returns `Some(lit)` when at least one tick fired,
    /// with the lit cell after the last of them.
    pub fn advance(&mut self, dt: Duration) -> Option<Option<usize>> {
        let SequencerState::Running { since_tick } = self.state else {
            return None;
        };
        let total = since_tick + dt;
        let period_ns = self.period.as_nanos();
        let ticks = total.as_nanos() / period_ns;
        let rest = Duration::from_nanos((total.as_nanos() % period_ns) as u64);
        self.state = SequencerState::Running { since_tick: rest };
        if ticks == 0 {
            return None;
        }
        // Only the last tick is observable; skip straight to its cursor.
        if !self.message.is_empty() {
            let skipped = ((ticks - 1) % self.message.len() as u128) as usize;
            self.cursor = (self.cursor + skipped) % self.message.len();
        }
        Some(self.tick())
    }

    /// One sequencer step: unlight all, light the cursor's letter, advance.
    pub fn tick(&mut self) -> Option<usize> {
        for cell in &mut self.cells {
            cell.lit = false;
        }
        let Some(&ch) = self.message.get(self.cursor) else {
            return None;
        };
        let lit = self.by_glyph.get(&ch).copied();
        if let Some(i) = lit {
            self.cells[i].lit = true;
        }
        self.cursor = (self.cursor + 1) % self.message.len();
        lit
    }
}
