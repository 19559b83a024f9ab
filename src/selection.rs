use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Outcome of parsing the user's answer to the property prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Keep every property.
    All,
    /// Keep the named properties, in the order the user gave them. Duplicates are kept.
    Subset(Vec<String>),
}

impl Selection {
    pub fn resolve(self, properties: &[String]) -> Vec<String> {
        match self {
            Selection::All => properties.to_vec(),
            Selection::Subset(names) => names,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("property number {index} is out of range, expected 1 to {count}")]
    OutOfRange { index: i64, count: usize },
}

/// Parse a comma separated list of 1-based property numbers.
///
/// Empty input selects all properties. A single bad token invalidates the whole selection.
pub fn parse_selection(input: &str, properties: &[String]) -> Result<Selection, SelectionError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Selection::All);
    }
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            let index: i64 = token
                .parse()
                .map_err(|_| SelectionError::NotANumber(token.to_string()))?;
            if index < 1 || index as u64 > properties.len() as u64 {
                return Err(SelectionError::OutOfRange {
                    index,
                    count: properties.len(),
                });
            }
            Ok(properties[(index - 1) as usize].clone())
        })
        .collect::<Result<Vec<String>, SelectionError>>()
        .map(Selection::Subset)
}

/// Show the numbered property list, read one line of input and resolve it to property names.
///
/// Invalid input falls back to all properties. There is no second attempt.
pub fn choose_properties<R: BufRead, W: Write>(
    properties: &[String],
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Vec<String>> {
    writeln!(writer, "\nAvailable properties:")?;
    for (i, property) in properties.iter().enumerate() {
        writeln!(writer, "{}: {}", i + 1, property)?;
    }
    writeln!(
        writer,
        "\nSelect properties to include in the output GeoJSON:"
    )?;
    writeln!(
        writer,
        "Enter the numbers separated by commas (e.g., 1,3,5), or press Enter to include all."
    )?;
    write!(writer, "Your selection: ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a selection was entered",
        ));
    }

    let selection = match parse_selection(&line, properties) {
        Ok(Selection::All) => {
            writeln!(writer, "Including all properties.")?;
            Selection::All
        }
        Ok(Selection::Subset(names)) => {
            writeln!(writer, "Selected properties: {:?}", names)?;
            Selection::Subset(names)
        }
        Err(err) => {
            log::warn!("Discarding selection {:?}: {}", line.trim(), err);
            writeln!(writer, "Invalid input. Including all properties.")?;
            Selection::All
        }
    };
    Ok(selection.resolve(properties))
}
