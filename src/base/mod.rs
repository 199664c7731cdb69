pub mod algorithms;
pub mod enums;
pub mod structs;
pub mod traits;
