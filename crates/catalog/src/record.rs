//! CSV record reader.
//!
//! Quote-aware splitting per RFC 4180: fields are comma-separated, a field
//! may be wrapped in double quotes, a doubled quote inside a quoted field is
//! a literal quote, and commas or line breaks inside a quoted field belong to
//! the field. Commas inside values are a correctness requirement here, not an
//! edge case.
//!
//! The reader is lenient where real-world exports are sloppy: a quote in the
//! middle of an unquoted field is kept literally, and an unterminated quoted
//! field runs to end of input.

/// Split the full CSV input into records of raw (untrimmed) fields.
///
/// CRLF and LF line endings are both accepted. Fully empty records (e.g. a
/// trailing newline or blank line) are dropped; they carry no row data.
pub fn read_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    // Whether the current field had any content (quoted "" counts).
    let mut field_started = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if field.is_empty() && !field_started => {
                field_started = true;
                read_quoted(&mut chars, &mut field);
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {
                // handled by the '\n' arm
            }
            '\n' => {
                flush_record(&mut records, &mut record, &mut field, &mut field_started);
            }
            other => {
                field_started = true;
                field.push(other);
            }
        }
    }
    flush_record(&mut records, &mut record, &mut field, &mut field_started);

    records
}

/// Consume a quoted field body, `chars` positioned just past the opening quote.
fn read_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, field: &mut String) {
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
                field.push('"');
            } else {
                return;
            }
        } else {
            field.push(c);
        }
    }
    // Unterminated quote: the field ran to end of input.
}

fn flush_record(
    records: &mut Vec<Vec<String>>,
    record: &mut Vec<String>,
    field: &mut String,
    field_started: &mut bool,
) {
    let had_field = *field_started || !field.is_empty();
    if !record.is_empty() || had_field {
        record.push(std::mem::take(field));
        records.push(std::mem::take(record));
    }
    *field_started = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_plain_records() {
        let records = read_records("a,b,c\nd,e,f\n");
        assert_eq!(records, vec![rec(&["a", "b", "c"]), rec(&["d", "e", "f"])]);
    }

    #[test]
    fn comma_inside_quotes_stays_in_field() {
        let records = read_records("A1,\"Mug, large\",Kitchen\n");
        assert_eq!(records, vec![rec(&["A1", "Mug, large", "Kitchen"])]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        let records = read_records("\"say \"\"hi\"\"\",x");
        assert_eq!(records, vec![rec(&["say \"hi\"", "x"])]);
    }

    #[test]
    fn newline_inside_quotes_stays_in_field() {
        let records = read_records("\"two\nlines\",x\ny,z");
        assert_eq!(records, vec![rec(&["two\nlines", "x"]), rec(&["y", "z"])]);
    }

    #[test]
    fn crlf_line_endings() {
        let records = read_records("a,b\r\nc,d\r\n");
        assert_eq!(records, vec![rec(&["a", "b"]), rec(&["c", "d"])]);
    }

    #[test]
    fn blank_lines_produce_no_records() {
        let records = read_records("a,b\n\n\nc,d\n");
        assert_eq!(records, vec![rec(&["a", "b"]), rec(&["c", "d"])]);
    }

    #[test]
    fn trailing_empty_fields_survive() {
        let records = read_records("a,,\n");
        assert_eq!(records, vec![rec(&["a", "", ""])]);
    }

    #[test]
    fn quoted_empty_field_counts_as_a_field() {
        let records = read_records("\"\"\n");
        assert_eq!(records, vec![rec(&[""])]);
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let records = read_records("a,\"oops");
        assert_eq!(records, vec![rec(&["a", "oops"])]);
    }

    #[test]
    fn stray_quote_in_unquoted_field_is_literal() {
        let records = read_records("it\"s,fine");
        assert_eq!(records, vec![rec(&["it\"s", "fine"])]);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(read_records("").is_empty());
        assert!(read_records("\n").is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// RFC 4180 writer used to round-trip arbitrary field content.
        fn write_csv(records: &[Vec<String>]) -> String {
            let mut out = String::new();
            for record in records {
                let line: Vec<String> = record
                    .iter()
                    .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
                    .collect();
                out.push_str(&line.join(","));
                out.push('\n');
            }
            out
        }

        proptest! {
            #[test]
            fn roundtrips_arbitrary_fields(
                records in proptest::collection::vec(
                    proptest::collection::vec(".{0,20}", 1..6),
                    1..8,
                )
            ) {
                let encoded = write_csv(&records);
                prop_assert_eq!(read_records(&encoded), records);
            }
        }
    }
}
