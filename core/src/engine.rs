use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::generator::{Choice, ChoiceGenerator, ChoiceId, ChoiceRack};
use crate::types::*;
use crate::GameConfig;

/// Valid transitions:
/// - Ready -> Active
/// - Ready -> Over
/// - Active -> Over
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No placement made yet
    Ready,
    /// At least one placement made, legal moves remain
    Active,
    /// No offered choice fits anywhere; absorbing until restart
    Over,
}

impl SessionState {
    /// Indicates the session has not seen a placement yet
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Indicates the session has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Per-move feedback for the caller: what was cleared, what it was worth,
/// and where the session stands afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Cells emptied by this move, row-major. Hosts drive clear effects off
    /// this list.
    pub cleared: Vec<Ix2>,
    /// Points earned by this move, one per cleared cell.
    pub points: Ax,
    /// Combo counter after this move.
    pub combo: u32,
    /// Whether this move ended the session.
    pub is_over: bool,
}

/// Represents one game from start to finish: board, rack, and scoring.
/// Randomness stays outside, injected per call through a [`ChoiceGenerator`],
/// so a session is plain serializable state a host can stash and restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    board: Board,
    choices: ChoiceRack,
    score: u32,
    combo: u32,
    max_combo: u32,
    move_count: u32,
    state: SessionState,
}

impl Session {
    pub fn new(config: GameConfig, generator: &mut dyn ChoiceGenerator) -> Result<Self> {
        let board = Board::new(config.size);
        let choices = generator.generate(config.choice_count as usize)?;
        let mut session = Self {
            config,
            board,
            choices,
            score: 0,
            combo: 0,
            max_combo: 0,
            move_count: 0,
            state: SessionState::Ready,
        };
        // a board smaller than everything on offer is dead on arrival
        if !has_any_valid_move(&session.board, &session.choices) {
            session.state = SessionState::Over;
        }
        Ok(session)
    }

    /// Fresh session in place: empty board, zeroed counters, new rack. Works
    /// from any state, including `Over`.
    pub fn restart(&mut self, generator: &mut dyn ChoiceGenerator) -> Result<()> {
        *self = Self::new(self.config, generator)?;
        log::debug!("session restarted");
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_final()
    }

    /// Validates and applies one placement, then runs the clear and terminal
    /// steps. Every failure leaves the session exactly as it was.
    pub fn apply_move(
        &mut self,
        generator: &mut dyn ChoiceGenerator,
        choice_id: ChoiceId,
        origin: Ix2,
    ) -> Result<MoveReport> {
        self.check_not_over()?;

        let slot = self
            .choices
            .iter()
            .position(|choice| choice.id == choice_id)
            .ok_or(GameError::UnknownChoice)?;

        let (shape, color) = {
            let choice = &self.choices[slot];
            (choice.shape.clone(), choice.color)
        };
        if !self.board.can_place(&shape, origin) {
            return Err(GameError::IllegalPlacement);
        }

        self.board.place(&shape, origin, color);

        let marked = self.board.mark_for_clear();
        let points = marked.len() as Ax;
        if marked.is_empty() {
            // a placement that clears nothing breaks the chain
            self.combo = 0;
        } else {
            self.board.commit_clear(&marked);
            self.score += u32::from(points);
            // any clearing placement extends the chain by exactly one,
            // regardless of how many lines went
            self.combo += 1;
            self.max_combo = self.max_combo.max(self.combo);
        }

        self.choices.remove(slot);
        if self.choices.is_empty() {
            // a rack size the generator accepted at construction stays
            // acceptable here, so this only fails on misconfiguration
            self.choices = generator.generate(self.config.choice_count as usize)?;
        }

        self.move_count += 1;
        self.mark_started();
        if !has_any_valid_move(&self.board, &self.choices) {
            self.state = SessionState::Over;
            log::debug!("no legal moves remain, session over");
        }

        log::debug!(
            "placed {} at {:?}, cleared {} cells, combo {}",
            shape.name(),
            origin,
            points,
            self.combo
        );

        Ok(MoveReport {
            cleared: marked.into_iter().collect(),
            points,
            combo: self.combo,
            is_over: self.state.is_final(),
        })
    }

    fn check_not_over(&self) -> Result<()> {
        if self.state.is_final() {
            Err(GameError::AlreadyOver)
        } else {
            Ok(())
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::Ready) {
            self.state = SessionState::Active;
        }
    }
}

/// True iff at least one offered choice fits somewhere on the board.
/// Exhaustive `choices × origins` scan with early exit; never mutates.
pub fn has_any_valid_move(board: &Board, choices: &[Choice]) -> bool {
    choices
        .iter()
        .any(|choice| board.has_room_for(&choice.shape))
}
