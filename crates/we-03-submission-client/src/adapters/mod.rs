pub mod keys;
pub mod rest;
