pub mod address_service;
pub mod catalog_service;
pub mod dashboard_service;
pub mod funnel_service;
pub mod order_service;
pub mod pricing_service;
pub mod proposal_service;
pub mod shipping_service;
