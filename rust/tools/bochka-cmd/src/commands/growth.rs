//! Growth command implementation

use std::io::Write;

use anyhow::Result;
use bochka::SequenceContainer;

pub fn run(count: usize, out: &mut impl Write) -> Result<()> {
    let mut container = SequenceContainer::new();
    writeln!(out, "Initial Capacity: {}", container.capacity())?;
    for i in 0..count {
        container.add(i);
        writeln!(
            out,
            "Count: {}, Capacity: {}",
            container.len(),
            container.capacity()
        )?;
    }
    container.trim_excess();
    writeln!(out, "After TrimExcess(): Capacity: {}", container.capacity())?;
    Ok(())
}
