pub mod inventory;
pub mod locations;
pub mod materials;
