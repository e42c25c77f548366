pub mod location;
pub mod location_material;
pub mod material;
pub mod stock_transaction;
