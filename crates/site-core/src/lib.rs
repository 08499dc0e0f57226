pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod face;
pub mod nav;
pub mod playlist;
pub mod reactive;
pub mod rotation;
pub mod scene;
pub mod site;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use face::*;
pub use nav::*;
pub use playlist::*;
pub use reactive::*;
pub use rotation::*;
pub use scene::*;
pub use site::*;
