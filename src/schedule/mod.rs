pub mod captions;
pub mod segments;
