pub mod effect;
pub mod params;
pub mod transform;
pub mod transitions;
