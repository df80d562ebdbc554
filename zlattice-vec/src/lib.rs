mod vec;

pub use vec::IntVec;
