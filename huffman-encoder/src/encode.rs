use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
};

use log::debug;
use serde_json::json;

use crate::{
    frequency::FrequencyTable,
    prefix_code_table::{generate_codes, CodeMap},
    report,
    tree::Node,
};

/// Maps every symbol of `content` through the code table and concatenates the
/// codes in input order. The table was built from this same content, so every
/// symbol has a code.
pub fn encode(content: &str, codes: &CodeMap) -> String {
    content.chars().map(|ch| codes[&ch].as_str()).collect()
}

// The code table and the encoded payload are two JSON documents appended to
// the same sink; consumers read them back in that order.
fn write_artifact<W: Write>(
    writer: &mut W,
    codes: &CodeMap,
    encoded: &str,
) -> Result<(), Box<dyn Error>> {
    write!(writer, "{}", serde_json::to_string(codes)?)?;
    write!(writer, "{}", json!({ "encoded": encoded }))?;

    Ok(())
}

/// Runs the whole batch over an already-normalized input: count, build the
/// tree, assign codes, encode, then write the optional artifact and print the
/// report.
pub fn run(content: &str, artifact_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    let frequencies = FrequencyTable::from_text(content);
    debug!("counted {} distinct symbols", frequencies.len());

    let root = Node::build(&frequencies)?;
    let codes = generate_codes(&root);
    let encoded = encode(content, &codes);
    debug!(
        "encoded {} symbols into {} bits",
        content.chars().count(),
        encoded.len()
    );

    if let Some(artifact_file) = artifact_file {
        let mut writer = BufWriter::new(File::create(artifact_file)?);
        write_artifact(&mut writer, &codes, &encoded)?;
        debug!("wrote code table and encoded output to {artifact_file}");
    }

    report::print_report(content, &frequencies, &codes, &encoded);

    Ok(())
}
