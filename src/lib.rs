#![no_std]

pub mod accel;
pub mod color;
pub mod colorizer;
pub mod config;
pub mod error;
pub mod frame;
pub mod orientation;
pub mod point;
pub mod transform;
