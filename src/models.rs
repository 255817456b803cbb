pub mod address;
pub mod catalog;
pub mod dashboard;
pub mod funnel;
pub mod orders;
pub mod proposal;
pub mod settings;
