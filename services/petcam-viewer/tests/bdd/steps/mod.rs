//! BDD step definitions for the PetCam viewer

pub mod capture_steps;
pub mod load_steps;
pub mod navigation_steps;
