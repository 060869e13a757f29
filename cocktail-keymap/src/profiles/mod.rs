//! Built-in board profiles.

pub mod cocktail;
pub mod macway;

pub use cocktail::COCKTAIL;
pub use macway::MACWAY;
