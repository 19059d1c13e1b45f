//! Browser bindings for the blokburst engine. The JS host owns rendering,
//! drag-and-drop, sound, and score persistence; this crate only marshals
//! engine calls and JSON snapshots across the wasm boundary.

use blokburst_core as game;
use game::{ChoiceId, GameConfig, GameError, RandomChoiceGenerator, Session};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("engine bindings loaded");
}

/// Flat view of one offered block, shaped for the JS side.
#[derive(Serialize)]
struct ChoiceView {
    id: u64,
    name: &'static str,
    cells: Vec<Vec<bool>>,
    color: u8,
}

/// Flat view of the whole session: grid rows of nullable palette indices
/// plus the counters the host displays.
#[derive(Serialize)]
struct SessionView {
    size: u8,
    grid: Vec<Vec<Option<u8>>>,
    score: u32,
    combo: u32,
    max_combo: u32,
    move_count: u32,
    choices: Vec<ChoiceView>,
    is_over: bool,
}

fn shape_cells(shape: &game::Shape) -> Vec<Vec<bool>> {
    let (rows, cols) = shape.size();
    let mut cells = vec![vec![false; cols as usize]; rows as usize];
    for (r, c) in shape.offsets() {
        cells[r as usize][c as usize] = true;
    }
    cells
}

fn session_view(session: &Session) -> SessionView {
    let size = session.board().size();
    let grid = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| session.board().cell_at((row, col)).color().map(|tag| tag.0))
                .collect()
        })
        .collect();
    let choices = session
        .choices()
        .iter()
        .map(|choice| ChoiceView {
            id: choice.id.0,
            name: choice.shape.name(),
            cells: shape_cells(&choice.shape),
            color: choice.color.0,
        })
        .collect();

    SessionView {
        size,
        grid,
        score: session.score(),
        combo: session.combo(),
        max_combo: session.max_combo(),
        move_count: session.move_count(),
        choices,
        is_over: session.is_over(),
    }
}

/// One game session plus its seeded choice source. `seed` lets the host
/// reproduce a game, e.g. from a share link.
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    generator: RandomChoiceGenerator,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: u8, choice_count: u8, seed: u64) -> Result<WebGame, JsValue> {
        let mut generator = RandomChoiceGenerator::new(seed);
        let session = Session::new(GameConfig::new(board_size, choice_count), &mut generator)
            .map_err(to_js)?;
        Ok(WebGame { session, generator })
    }

    /// Applies one placement and returns the move report as JSON. An illegal
    /// drop surfaces as an error the host maps to drag-rejection feedback.
    pub fn apply_move(&mut self, choice_id: u64, row: u8, col: u8) -> Result<String, JsValue> {
        let report = self
            .session
            .apply_move(&mut self.generator, ChoiceId(choice_id), (row, col))
            .map_err(to_js)?;
        Ok(serde_json::to_string(&report).expect("report serializes"))
    }

    /// Full session snapshot as JSON; the host re-renders from this.
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&session_view(&self.session)).expect("snapshot serializes")
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.session.restart(&mut self.generator).map_err(to_js)?;
        Ok(())
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn combo(&self) -> u32 {
        self.session.combo()
    }

    pub fn max_combo(&self) -> u32 {
        self.session.max_combo()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }
}
