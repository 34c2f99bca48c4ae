pub mod cli;
pub mod config;
pub mod cosmo;
pub mod data;
pub mod error;
pub mod figures;
