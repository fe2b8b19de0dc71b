#[macro_use]
extern crate quickcheck;

mod tree;
