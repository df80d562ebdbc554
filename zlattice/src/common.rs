use std::io::Write;

use zlattice_seq::LatticeSeq;

/// Write every point of the enumeration to stdout, one per line,
/// followed by the total. With `count_only`, only the total.
pub(crate) fn print_points(seq: &impl LatticeSeq, count_only: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut n: u128 = 0;
    for point in seq.points() {
        n += 1;
        if !count_only {
            writeln!(out, "{}", point)?;
        }
    }
    writeln!(out, "{} points", n)?;
    Ok(())
}
