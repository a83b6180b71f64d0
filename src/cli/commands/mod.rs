pub mod remote;
pub mod token;
