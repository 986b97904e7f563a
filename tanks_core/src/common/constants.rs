//! Up front configuration values

/// Width of the arena in world units
pub const ARENA_WIDTH: f64 = 950.0;
/// Height of the arena in world units
pub const ARENA_HEIGHT: f64 = 750.0;

/// Side of a single border wall cell
pub const WALL_SIZE: f64 = 50.0;
/// Side of a movable box
pub const BOX_SIZE: f64 = 50.0;

/// Horizontal start position of the Tank, it starts vertically centered
pub const TANK_START_X: f64 = 100.0;
/// Side of the square hitbox used for the Tank
pub const TANK_SIZE: f64 = 40.0;

/// Degrees the Tank turns per tick
pub const ROTATION_SPEED: f64 = 0.9;
/// Units the Tank drives forward per tick, reversing is half as fast
pub const MOVE_SPEED: f64 = 2.5;

/// Units a Bullet travels per tick
pub const BULLET_SPEED: f64 = 200.0;
/// Side of the square hitbox used for a Bullet
pub const BULLET_SIZE: f64 = 10.0;
/// Pool size when firing is gated by a cooldown
pub const BULLET_POOL_SIZE: usize = 20;
/// Pool size when only one bullet may be out at a time
pub const SINGLE_SHOT_POOL_SIZE: usize = 6;
/// Rounds available to the single shot Tank
pub const SINGLE_SHOT_AMMO: u32 = 3;
/// Minimum time between two shots in milliseconds
pub const FIRE_COOLDOWN_MS: u64 = 1000;
