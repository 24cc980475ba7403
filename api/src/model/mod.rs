pub mod report;
pub mod reservation;
