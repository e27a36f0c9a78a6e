//! A collection of reusable graph algorithms used as building blocks by tour solvers.

mod euler;
pub use self::euler::*;

mod matching;
pub use self::matching::*;

mod spanning_tree;
pub use self::spanning_tree::*;
