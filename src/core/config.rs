/// Score added to a placement for every `Hit` cell it passes through.
pub const HIT_BONUS: u32 = 10;

/// Rows are encoded as a single letter `A..=Z`.
pub const MAX_DIMENSION: usize = 26;

/// Board dimension of the classic game.
pub const DEFAULT_DIMENSION: usize = 10;

/// Classic fleet as `(length, count)` pairs.
pub const DEFAULT_FLEET: [(usize, usize); 4] = [(5, 1), (4, 1), (3, 2), (2, 1)];
