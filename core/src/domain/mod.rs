pub mod common;
pub mod menu_scan;
