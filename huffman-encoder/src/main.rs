use std::{env, error::Error, fs};

use huffman_encoder::encode;

const SKIP_BINARY_PATH: usize = 1;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(SKIP_BINARY_PATH);
    let input_file_name = args.next().ok_or("failed to get input_file_name")?;
    let artifact_file_name = args.next();

    // Case folding is an input policy, not part of the code construction:
    // everything downstream sees the folded text.
    let content = fs::read_to_string(&input_file_name)?.to_lowercase();

    encode::run(&content, artifact_file_name.as_deref())?;

    Ok(())
}
