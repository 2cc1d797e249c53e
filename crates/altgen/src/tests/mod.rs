mod property_escape;
pub mod utils;
