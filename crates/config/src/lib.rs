#![forbid(unsafe_code)]

mod error;
mod model;
mod season;

pub use error::Error;
pub use model::{Driver, Settings, Track};
pub use season::Season;
