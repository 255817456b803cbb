pub mod address;
pub mod catalog;
pub mod dashboard;
pub mod funnel;
pub mod orders;
pub mod proposals;
pub mod settings;
