pub mod achievements;
pub mod games;
pub mod graphs;
pub mod home;
pub mod not_found;
pub mod progress;
pub mod quiz;
pub mod sorting;
