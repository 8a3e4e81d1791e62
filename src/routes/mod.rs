pub mod games;
pub mod health;
pub mod patients;
pub mod players;
pub mod visits;
