//! Demo command implementation

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use bochka::{ElementDisplay, SequenceContainer, bochka};
use clap::ValueEnum;

use crate::utils::{position, yes_no};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Ints,
    Strings,
    People,
    All,
}

pub fn run(section: Section, out: &mut impl Write) -> Result<()> {
    if matches!(section, Section::Ints | Section::All) {
        writeln!(out, "=== Testing SequenceContainer<i32> ===")?;
        ints(out).context("integer walkthrough")?;
    }
    if matches!(section, Section::Strings | Section::All) {
        writeln!(out, "\n=== Testing SequenceContainer<Option<String>> ===")?;
        strings(out).context("string walkthrough")?;
    }
    if matches!(section, Section::People | Section::All) {
        writeln!(out, "\n=== Testing SequenceContainer<Person> (custom type) ===")?;
        people(out).context("person walkthrough")?;
    }
    writeln!(out, "\nAll operations completed.")?;
    Ok(())
}

fn ints(out: &mut impl Write) -> Result<()> {
    let empty = SequenceContainer::<i32>::new();
    writeln!(
        out,
        "Empty container: {} (Count: {})",
        empty.stringify(),
        empty.len()
    )?;

    let mut numbers: SequenceContainer<i32> = bochka![1, 2, 3, 4, 5];
    writeln!(out, "Initialized with values: {numbers}")?;

    numbers.add(6);
    writeln!(out, "After Add(6): {numbers}")?;

    writeln!(out, "numbers[2] = {}", numbers.get(2)?)?;
    numbers.set(2, 100)?;
    writeln!(out, "After numbers[2] = 100: {numbers}")?;

    writeln!(out, "Contains 100? {}", yes_no(numbers.contains(&100)))?;
    writeln!(out, "Contains 999? {}", yes_no(numbers.contains(&999)))?;
    writeln!(out, "IndexOf 100: {}", position(numbers.index_of(&100)))?;
    writeln!(out, "IndexOf 999: {}", position(numbers.index_of(&999)))?;

    numbers.insert(3, 55)?;
    writeln!(out, "After Insert(3, 55): {numbers}")?;

    let removed = numbers.remove(&100);
    writeln!(
        out,
        "Remove(100) result: {}, new content: {numbers}",
        yes_no(removed)
    )?;

    numbers.remove_at(0)?;
    writeln!(out, "After RemoveAt(0): {numbers}")?;

    let mut array = [0; 10];
    numbers.copy_to(&mut array, 2)?;
    let copied: Vec<String> = array.iter().map(|v| v.to_string()).collect();
    writeln!(out, "Copied to array: {}", copied.join(", "))?;

    numbers.clear();
    writeln!(
        out,
        "After Clear(): {numbers} (Count: {})",
        numbers.len()
    )?;

    let first: SequenceContainer<i32> = bochka![1, 2, 3];
    let second: SequenceContainer<i32> = bochka![1, 2, 3];
    let third: SequenceContainer<i32> = bochka![4, 5, 6];

    writeln!(out, "\nOperator Tests:")?;
    writeln!(out, "first == second: {}", yes_no(first == second))?;
    writeln!(out, "first == third: {}", yes_no(first == third))?;
    writeln!(out, "first != third: {}", yes_no(first != third))?;
    writeln!(out, "first < third: {}", yes_no(first < third))?;
    writeln!(out, "third > first: {}", yes_no(third > first))?;
    writeln!(out, "first <= second: {}", yes_no(first <= second))?;
    writeln!(out, "first >= second: {}", yes_no(first >= second))?;

    let mut growing = SequenceContainer::new();
    writeln!(out, "\nInitial Capacity: {}", growing.capacity())?;
    for i in 0..10 {
        growing.add(i);
        writeln!(
            out,
            "Count: {}, Capacity: {}",
            growing.len(),
            growing.capacity()
        )?;
    }
    growing.trim_excess();
    writeln!(out, "After TrimExcess(): Capacity: {}", growing.capacity())?;

    writeln!(out, "\nEnumeration Test:")?;
    let mut cursor = growing.cursor();
    while let Some(item) = cursor.move_next(&growing)? {
        write!(out, "{item} ")?;
    }
    writeln!(out)?;

    let mut cursor = growing.cursor();
    cursor.move_next(&growing)?;
    growing.add(10);
    match cursor.move_next(&growing) {
        Ok(_) => writeln!(out, "Modification during enumeration went unnoticed")?,
        Err(e) => writeln!(out, "Add during enumeration: {e}")?,
    }
    Ok(())
}

fn strings(out: &mut impl Write) -> Result<()> {
    let mut words: SequenceContainer<Option<String>> = ["apple", "banana", "cherry"]
        .into_iter()
        .map(|w| Some(w.to_string()))
        .collect();
    writeln!(out, "Initial words: {words}")?;

    words.add(None);
    writeln!(out, "After adding null: {words}")?;
    writeln!(out, "Contains null? {}", yes_no(words.contains(&None)))?;
    writeln!(out, "IndexOf null: {}", position(words.index_of(&None)))?;

    words.set(1, Some("blueberry".to_string()))?;
    writeln!(out, "After words[1] = 'blueberry': {words}")?;

    let other: SequenceContainer<Option<String>> = bochka![
        Some("apple".to_string()),
        Some("blueberry".to_string()),
        Some("cherry".to_string()),
        None,
    ];
    writeln!(out, "words == other: {}", yes_no(words == other))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.age.cmp(&other.age))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

impl ElementDisplay for Person {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn people(out: &mut impl Write) -> Result<()> {
    let people: SequenceContainer<Person> = bochka![
        Person::new("Alice", 30),
        Person::new("Bob", 25),
        Person::new("Charlie", 35),
    ];
    writeln!(out, "Initial people: {people}")?;

    let saba = Person::new("Saba", 30);
    writeln!(out, "Contains Saba? {}", yes_no(people.contains(&saba)))?;
    writeln!(out, "IndexOf Saba: {}", position(people.index_of(&saba)))?;

    let people2: SequenceContainer<Person> = bochka![
        Person::new("Saba", 30),
        Person::new("Giorgi", 25),
        Person::new("vighaca", 35),
    ];
    let people3: SequenceContainer<Person> =
        bochka![Person::new("Levani", 40), Person::new("Totla", 35)];

    writeln!(out, "people == people2: {}", yes_no(people == people2))?;
    writeln!(out, "people == people3: {}", yes_no(people == people3))?;
    writeln!(out, "people < people3: {}", yes_no(people < people3))?;
    Ok(())
}
