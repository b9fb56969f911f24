pub mod noise;
pub mod spring;
