use anyhow::Context;
use clap::Parser;
use zlattice_seq::BoxSeq;
use zlattice_vec::IntVec;

use crate::common::print_points;

#[derive(Debug, Parser)]
pub(crate) struct Boxed {
    /// comma-separated inclusive bounds, one per coordinate
    /// (e.g. 0,1,2,3,0)
    pub(crate) bounds: String,
    /// print only the number of points
    #[arg(long)]
    pub(crate) count: bool,
}

impl Boxed {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let bounds = parse_bounds(&self.bounds)?;
        let seq = BoxSeq::new(bounds)?;
        print_points(&seq, self.count)
    }
}

fn parse_bounds(s: &str) -> anyhow::Result<IntVec> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .with_context(|| format!("invalid bound: {:?}", part))
        })
        .collect()
}
