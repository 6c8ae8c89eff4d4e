#![allow(dead_code)]

pub mod analysis_testkit;
