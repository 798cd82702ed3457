//! The move processor (C6): transactional batch dispatch of
//! [`GameMove`]s against a [`Game`], producing an ordered, deterministic
//! [`WorldChange`] log (§4.4).

pub mod dispatch;

use hexwar_contracts::{EngineError, GameMove, GameMoveResult};
use hexwar_game::Game;

/// The outcome of a batch that stopped partway through: the error that
/// halted it (§4.4). The game's world and turn state have already been
/// rolled back to their pre-batch snapshot by the time this is
/// returned, so — per the snapshot-rollback variant's contract in §7 —
/// no partial results are carried here: none of the batch's moves are
/// reflected in the world, not even the ones that validated cleanly
/// before the failure.
#[derive(Debug)]
pub struct MoveBatchError {
    pub error: EngineError,
}

/// Applies `moves` to `game` in order. On full success, returns one
/// [`GameMoveResult`] per move, aligned 1:1 with the input. On the
/// first failure, the game's world and turn state are rolled back to
/// their pre-batch snapshot (the recommended strategy per §4.4) and no
/// results are returned, alongside the failing move's error.
///
/// # Errors
///
/// Returns [`MoveBatchError`] if any move in the batch fails validation.
pub fn process_moves(game: &mut Game, moves: &[GameMove]) -> Result<Vec<GameMoveResult>, MoveBatchError> {
    let snapshot = game.snapshot();
    let mut results = Vec::with_capacity(moves.len());

    for game_move in moves {
        log::debug!("process_moves: dispatching {:?} for player {}", game_move.kind, game_move.player);
        match dispatch::dispatch(game, game_move) {
            Ok(result) => results.push(result),
            Err(error) => {
                game.restore(snapshot);
                return Err(MoveBatchError { error });
            }
        }
    }

    Ok(results)
}
