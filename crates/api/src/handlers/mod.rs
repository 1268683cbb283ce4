pub mod submissions;
pub mod upload;
pub mod validation;
