pub mod amount;
pub mod vault;
