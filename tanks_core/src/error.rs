use std::fmt;

/// Reasons a session refuses to start
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    BulletPoolEmpty,
    ArenaSize { width: f64, height: f64 },
    WallSize(f64),
    BoxSize(f64),
    /// Tank or bullet size that is not a positive number
    EntitySize { name: &'static str, size: f64 },
    /// Speed that is not a finite number
    Speed { name: &'static str, speed: f64 },
    /// A box of the layout does not fit inside the arena
    BoxOutOfBounds { index: usize, x: f64, y: f64 },
    CooldownZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BulletPoolEmpty => write!(f, "bullet pool needs at least one slot"),
            Self::ArenaSize { width, height } => {
                write!(f, "invalid arena size: {width}x{height}")
            }
            Self::WallSize(size) => write!(f, "invalid wall cell size: {size}"),
            Self::BoxSize(size) => write!(f, "invalid box size: {size}"),
            Self::EntitySize { name, size } => write!(f, "invalid {name} size: {size}"),
            Self::Speed { name, speed } => write!(f, "invalid {name} speed: {speed}"),
            Self::BoxOutOfBounds { index, x, y } => {
                write!(f, "box {index} at ({x}, {y}) lies outside the arena")
            }
            Self::CooldownZero => write!(f, "fire cooldown must be at least 1ms"),
        }
    }
}

impl std::error::Error for ConfigError {}
