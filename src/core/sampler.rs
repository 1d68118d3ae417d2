use rand::seq::index;
use rand::Rng;

use crate::domain::model::{Card, GridSpec};
use crate::utils::error::{BingoError, Result};

/// Draws `rows * cols` entries from the pool uniformly at random without
/// replacement and lays them out row-major. Every cell maps to a distinct
/// pool position. The RNG is injected so tests can seed it; production runs
/// seed fresh from the OS.
pub fn sample<R: Rng + ?Sized>(pool: &[String], grid: GridSpec, rng: &mut R) -> Result<Card> {
    let needed = grid.capacity();
    if needed > pool.len() {
        return Err(BingoError::CapacityError {
            needed,
            available: pool.len(),
        });
    }

    let cells = index::sample(rng, pool.len(), needed)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();

    Ok(Card::from_cells(grid, cells))
}
