pub mod bullet;
pub mod constants;
pub mod contact;
pub mod environment;
pub mod gamestate;
pub mod input;
pub mod tank;
