pub mod case;
pub mod store;
