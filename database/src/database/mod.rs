pub mod database;
pub mod options;
pub mod store;
pub mod table;
