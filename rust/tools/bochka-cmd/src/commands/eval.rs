//! Eval command implementation

use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use bochka::SequenceContainer;

/// A single scripted container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    Insert(usize, i64),
    Set(usize, i64),
    Remove(i64),
    RemoveAt(usize),
    Clear,
    Capacity(usize),
    Trim,
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Op> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        let op = match (name, args.as_slice()) {
            ("add", [value]) => Op::Add(parse_value(value)?),
            ("insert", [index, value]) => Op::Insert(parse_index(index)?, parse_value(value)?),
            ("set", [index, value]) => Op::Set(parse_index(index)?, parse_value(value)?),
            ("remove", [value]) => Op::Remove(parse_value(value)?),
            ("remove-at", [index]) => Op::RemoveAt(parse_index(index)?),
            ("clear", []) => Op::Clear,
            ("capacity", [capacity]) => Op::Capacity(parse_index(capacity)?),
            ("trim", []) => Op::Trim,
            _ => bail!("Unrecognized operation: {s}"),
        };
        Ok(op)
    }
}

fn parse_value(s: &str) -> Result<i64> {
    s.parse()
        .with_context(|| format!("Invalid element value: {s}"))
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse()
        .with_context(|| format!("Invalid index or capacity: {s}"))
}

/// Applies `op` to `container`, returning a short description of the outcome.
fn apply(container: &mut SequenceContainer<i64>, op: Op) -> bochka::Result<String> {
    let outcome = match op {
        Op::Add(value) => {
            container.add(value);
            format!("Add({value})")
        }
        Op::Insert(index, value) => {
            container.insert(index, value)?;
            format!("Insert({index}, {value})")
        }
        Op::Set(index, value) => {
            let old = container.set(index, value)?;
            format!("[{index}] = {value} (was {old})")
        }
        Op::Remove(value) => {
            let removed = container.remove(&value);
            format!("Remove({value}) result: {removed}")
        }
        Op::RemoveAt(index) => {
            let removed = container.remove_at(index)?;
            format!("RemoveAt({index}) removed {removed}")
        }
        Op::Clear => {
            container.clear();
            "Clear()".to_string()
        }
        Op::Capacity(capacity) => {
            container.set_capacity(capacity)?;
            format!("Capacity = {capacity}")
        }
        Op::Trim => {
            container.trim_excess();
            "TrimExcess()".to_string()
        }
    };
    Ok(outcome)
}

pub fn run(init: Vec<i64>, strict: bool, ops: &[String], out: &mut impl Write) -> Result<()> {
    let ops = ops
        .iter()
        .map(|op| op.parse::<Op>())
        .collect::<Result<Vec<_>>>()?;

    let mut container = SequenceContainer::from(init);
    writeln!(out, "Initial: [{container}]")?;

    for op in ops {
        match apply(&mut container, op) {
            Ok(outcome) => writeln!(
                out,
                "{outcome}: [{container}] (Count: {}, Capacity: {})",
                container.len(),
                container.capacity()
            )?,
            Err(e) if strict => {
                return Err(e).with_context(|| format!("Operation {op:?} failed"));
            }
            Err(e) => {
                log::debug!("operation {op:?} failed: {e}");
                writeln!(out, "{op:?} failed: {e}")?;
            }
        }
    }
    Ok(())
}
