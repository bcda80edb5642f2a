pub mod report;
pub mod statistics;
pub mod trends;
