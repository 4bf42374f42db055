pub mod location;
pub mod structure;

pub use location::Location;
pub use structure::Structure;
