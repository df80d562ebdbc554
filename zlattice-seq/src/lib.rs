mod error;
mod iter;
mod seq;

pub use error::{Error, Result};
pub use iter::Points;
pub use seq::{BoxSeq, CubeSeq, LatticeSeq};
