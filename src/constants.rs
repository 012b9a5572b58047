//! Public engine constants (§6).

/// Neighbor slots per pawn band in the flat move-index space.
pub const MAX_MVT_PER_PAWN: u16 = 10;
/// Size of the flat move-index space: four 10-slot pawn bands plus the pass index.
pub const MAX_MVTS: u16 = 4 * MAX_MVT_PER_PAWN + 1;

pub const NUMBER_REAL_NODES: usize = crate::topology::NUMBER_REAL_NODES;
/// Columns in the state tensor (component F).
pub const NUMBER_ATRIBUTES: usize = 23;

/// Exploration constant for classical UCT (component G).
pub const UCT_PARAMETER: f64 = 2.0;
/// Rollout ply cap before a classical MCTS simulation is scored a draw.
pub const MAX_TURN_PER_GAME_SIM: u32 = 20;

/// Exploration constant for PUCT (component H).
pub const PUCT_PARAMETER: f64 = 2.0;
/// Concentration parameter of the root Dirichlet noise.
pub const ALPHA_DIRICHLET: f64 = 0.8;
/// Simulations run per move during self-play.
pub const NUM_SIM_PER_MOVE: u32 = 400;
/// Self-play episodes are capped at this many plies.
pub const MAX_NB_TURN_SAMPLE: u32 = 100;
/// Turns at or below this index sample stochastically; later turns play the
/// best-visit child.
pub const NUM_TURN_EXP_BEFORE_BEST: u32 = 0;
