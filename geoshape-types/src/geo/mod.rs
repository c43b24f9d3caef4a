//! Geographic coordinates (longitude and latitude), see [`Position`].

mod position;

pub use position::Position;
