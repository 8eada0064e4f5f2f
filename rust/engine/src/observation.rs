use serde::{Deserialize, Serialize};

use crate::cards::all_faces;
use crate::game::GameState;

/// Observation tensor layout strategy. The two encodings are shape-coupled
/// to different downstream networks and must never be mixed within one
/// deployment; the engine is constructed with exactly one of them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Encoding {
    /// Three uniformly-filled 3x3 planes: player total, dealer up-card
    /// value, phase scalar.
    #[default]
    Coarse,
    /// Three 13x13 planes: player per-face count histogram broadcast across
    /// rows, dealer up-card one-hot likewise, third plane all zeros. Columns
    /// follow the canonical rank order (Two = 0 .. Ace = 12).
    Fine,
}

impl Encoding {
    /// Tensor dimensions as (planes, rows, columns).
    pub fn dimensions(self) -> (usize, usize, usize) {
        match self {
            Encoding::Coarse => (3, 3, 3),
            Encoding::Fine => (3, 13, 13),
        }
    }
}

/// Fixed-shape numeric tensor handed to a learned policy/value function.
/// Stored as a flat row-major buffer with an explicit shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// (planes, rows, columns)
    pub shape: (usize, usize, usize),
    /// Row-major plane data, `shape.0 * shape.1 * shape.2` entries
    pub data: Vec<f32>,
}

impl Observation {
    fn zeros(shape: (usize, usize, usize)) -> Self {
        Self {
            shape,
            data: vec![0.0; shape.0 * shape.1 * shape.2],
        }
    }

    pub fn at(&self, plane: usize, row: usize, col: usize) -> f32 {
        let (_, rows, cols) = self.shape;
        self.data[plane * rows * cols + row * cols + col]
    }

    fn set(&mut self, plane: usize, row: usize, col: usize, v: f32) {
        let (_, rows, cols) = self.shape;
        self.data[plane * rows * cols + row * cols + col] = v;
    }

    fn fill_plane(&mut self, plane: usize, v: f32) {
        let (_, rows, cols) = self.shape;
        let start = plane * rows * cols;
        self.data[start..start + rows * cols].fill(v);
    }
}

/// Encodes a state under the chosen strategy.
pub fn encode(encoding: Encoding, state: &GameState) -> Observation {
    match encoding {
        Encoding::Coarse => encode_coarse(state),
        Encoding::Fine => encode_fine(state),
    }
}

fn up_card_value(state: &GameState) -> f32 {
    state
        .dealer_hand
        .first()
        .map(|c| c.value() as f32)
        .unwrap_or(0.0)
}

fn encode_coarse(state: &GameState) -> Observation {
    let mut obs = Observation::zeros(Encoding::Coarse.dimensions());
    obs.fill_plane(0, state.player_hand.value() as f32);
    obs.fill_plane(1, up_card_value(state));
    obs.fill_plane(2, state.phase.as_scalar());
    obs
}

fn encode_fine(state: &GameState) -> Observation {
    let mut obs = Observation::zeros(Encoding::Fine.dimensions());
    let (_, rows, _) = obs.shape;

    let mut player_hist = [0.0f32; 13];
    for card in state.player_hand.cards() {
        player_hist[card.face.index()] += 1.0;
    }
    let mut dealer_hist = [0.0f32; 13];
    if let Some(up) = state.dealer_hand.first() {
        dealer_hist[up.face.index()] = 1.0;
    }

    for row in 0..rows {
        for face in all_faces() {
            obs.set(0, row, face.index(), player_hist[face.index()]);
            obs.set(1, row, face.index(), dealer_hist[face.index()]);
        }
    }
    // plane 2 stays all zeros
    obs
}
