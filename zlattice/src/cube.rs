use clap::Parser;
use zlattice_seq::CubeSeq;

use crate::common::print_points;

#[derive(Debug, Parser)]
pub(crate) struct Cube {
    /// number of coordinates in each point
    pub(crate) dim: usize,
    /// exclusive upper bound applied to every coordinate
    pub(crate) bound: i64,
    /// print only the number of points
    #[arg(long)]
    pub(crate) count: bool,
}

impl Cube {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let seq = CubeSeq::new(self.dim, self.bound)?;
        print_points(&seq, self.count)
    }
}
