pub mod error;
pub mod message;
pub mod model;
pub mod utility;
