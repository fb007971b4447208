pub mod building_dashboard;
pub mod coordination_dashboard;
pub mod housing_dashboard;
pub mod main_dashboard;
pub mod occupancy_dashboard;
pub mod settings;
pub mod zoning_applications;
pub mod zoning_dashboard;
