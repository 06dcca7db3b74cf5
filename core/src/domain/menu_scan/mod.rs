pub mod entities;
pub mod ports;
pub mod prompt;
pub mod salvage;
pub mod sample;
pub mod schema;
pub mod scrub;
pub mod services;
pub mod value_objects;
