// Domain layer - Value objects and the error taxonomy
pub mod dashboard;
pub mod error;
pub mod export;
