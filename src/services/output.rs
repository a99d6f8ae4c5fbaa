use crate::cli::ResultFormat;
use crate::domain::constants::{DETAILED_BANNER, DETAILED_TRAILER};
use crate::domain::models::{JsonOut, VerificationResult};
use serde::Serialize;
use std::io::Write;

/// The four field lines shared by both result formats.
fn field_lines(result: &VerificationResult) -> [String; 4] {
    [
        format!("Born: {}", result.date_of_birth),
        format!("Age: {}", result.age),
        format!("Gender: {}", result.gender),
        format!("Citizenship Status: {}", result.citizenship),
    ]
}

pub fn render_result(result: &VerificationResult, format: ResultFormat) -> Vec<String> {
    let fields = field_lines(result);
    match format {
        ResultFormat::Summary => fields.to_vec(),
        ResultFormat::Detailed => {
            let mut lines = Vec::with_capacity(7);
            lines.push(DETAILED_BANNER.to_string());
            lines.extend(fields);
            lines.push(DETAILED_TRAILER.to_string());
            lines.push(String::new());
            lines
        }
    }
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &VerificationResult,
    format: ResultFormat,
) -> std::io::Result<()> {
    for line in render_result(result, format) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, ok: bool, data: T) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    )?;
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        write_json(&mut std::io::stdout().lock(), true, data)?;
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
