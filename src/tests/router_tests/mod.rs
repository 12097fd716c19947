mod form_tests;
mod inventory_tests;
mod static_tests;
mod vehicle_tests;
