pub mod backend;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod links;
pub mod orbit;
pub mod random;
pub mod shape;
pub mod simulation;
pub mod state;

pub use backend::*;
pub use color::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use links::*;
pub use orbit::*;
pub use random::*;
pub use shape::*;
pub use simulation::*;
pub use state::*;
