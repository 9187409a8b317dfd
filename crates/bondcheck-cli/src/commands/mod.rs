pub mod check;
pub mod energy;
