//! Page components for the playbook UI
//!
//! This module contains the top-level page components for each route.

pub mod home;
pub mod not_found;
pub mod playbook;

pub use home::Home;
pub use not_found::NotFound;
pub use playbook::{AiInfluencer, AutomationAgency, ClothingBrand, Copywriting, PlaybookPage};
