mod error;
mod location;
mod movie;

pub use error::*;
pub use location::*;
pub use movie::*;
