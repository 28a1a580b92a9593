pub mod scale;
pub mod status;
