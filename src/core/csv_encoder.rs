/*
 * Serializes a sequence of extract records plus the fixed header row into
 * CSV text. The layout is stable: three identifier columns followed by the
 * vocabulary headers in declared order, one data row per container, every
 * row newline-terminated including the last.
 *
 * The continuation slot produced by the field collector has no column of
 * its own and is silently absent from the output; only the vocabulary
 * headers are printed.
 */
use super::collector::ExtractRecord;
use super::vocabulary::HeaderField;
use std::borrow::Cow;

pub const IDENTIFIER_COLUMNS: [&str; 3] = ["ID", "Pais", "Tamaño"];

/// Encodes the fixed header row plus one row per record.
pub fn encode_records(records: &[ExtractRecord]) -> String {
    let mut csv = String::new();

    let header_cells: Vec<&str> = IDENTIFIER_COLUMNS
        .iter()
        .copied()
        .chain(HeaderField::VOCABULARY.iter().map(|field| field.label()))
        .collect();
    push_row(&mut csv, &header_cells);

    for record in records {
        let mut cells: Vec<&str> = vec![
            record.identifier.id.as_str(),
            record.identifier.country.as_str(),
            record.identifier.size.as_str(),
        ];
        for field in HeaderField::VOCABULARY {
            cells.push(record.fields.value(field));
        }
        push_row(&mut csv, &cells);
    }
    csv
}

fn push_row(csv: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            csv.push(',');
        }
        csv.push_str(&escape_cell(cell));
    }
    csv.push('\n');
}

/*
 * Quotes a cell when it contains a comma, quote or line break, doubling
 * internal quotes. Display names are author-controlled and multi-line cells
 * are a sanctioned outcome of the collision policy, so unescaped joining
 * would corrupt the grid for any strict reader.
 */
fn escape_cell(cell: &str) -> Cow<'_, str> {
    if !cell.contains([',', '"', '\n', '\r']) {
        return Cow::Borrowed(cell);
    }
    let mut quoted = String::with_capacity(cell.len() + 2);
    quoted.push('"');
    for c in cell.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
