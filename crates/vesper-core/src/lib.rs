//! Core types shared between the Vesper compiler and runtime.

pub mod string;
