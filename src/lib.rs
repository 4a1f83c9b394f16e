// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod algebra;
pub mod calculus;
pub mod geometry;
pub mod numerical;
pub mod solve_result;
pub mod symbolic;
pub mod trigonometry;
