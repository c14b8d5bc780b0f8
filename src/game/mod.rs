//! Game simulation
//!
//! Plain data plus update functions, driven once per frame by `main`:
//! - Player: gravity, jump, walk, run-cycle animation
//! - Obstacles: scrolling nebulae and the finish line
//! - Outcome: sticky win/lose decision
//! - Parallax: looping background offsets
//!
//! Nothing here touches the macroquad context, so it all runs under `cargo test`.

pub mod player;
pub mod obstacles;
pub mod outcome;
pub mod parallax;
pub mod world;

pub use player::Player;
pub use obstacles::Obstacles;
pub use outcome::Outcome;
pub use parallax::Parallax;
pub use world::{GameWorld, Physics, SpriteSizes};
