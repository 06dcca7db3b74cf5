pub mod health;
pub mod menu_scan;
pub mod server;
