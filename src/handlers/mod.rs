// HTTP handlers

pub mod seed;
