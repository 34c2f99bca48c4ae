pub mod distance;
pub mod eos;
pub mod grid;
pub mod growth;
pub mod hubble;
pub mod params;
pub mod posterior;
pub mod shear;
