pub mod derive;
pub mod query;
