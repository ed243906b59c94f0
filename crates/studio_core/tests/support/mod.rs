#![allow(dead_code)]

pub mod sources;
