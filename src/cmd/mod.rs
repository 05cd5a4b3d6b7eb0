pub mod check;
pub mod rank;
