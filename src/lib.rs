//! Crate root module declarations for the terminal chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! notation and FEN utilities, and engine adapters) so the binary, tests,
//! and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod time_control;
}

pub mod moves {
    pub mod board_location;
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod move_matcher;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
    pub mod engine_uci;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod notation_parser;
    pub mod notation_tokenizer;
    pub mod render_game_state;
}
