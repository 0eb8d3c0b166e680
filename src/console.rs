use std::io::{self, BufRead, Write};

/// Writes the prompt, then reads one line with the trailing newline
/// stripped. A closed input stream is an `UnexpectedEof` error.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input closed",
        ));
    }

    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

/// Keeps prompting until the operator enters a parseable integer.
pub fn prompt_i64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<i64> {
    loop {
        let line = prompt_line(input, out, label)?;
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Please enter a number.")?,
        }
    }
}
