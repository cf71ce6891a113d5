pub mod canvas;
pub mod error;
pub mod fonts;
pub mod invoice;
pub mod objects;
pub mod writer;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use fonts::Font;
