pub mod material;
pub mod production;

pub use material::Material;
pub use production::Production;
