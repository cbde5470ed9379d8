use derive_more::Display;

/// Errors of the single batch encode operation. All of them are terminal:
/// there is no partial tree and no partial code table.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum HuffmanError {
    #[display(fmt = "nothing to encode: the frequency table is empty")]
    EmptyInput,

    #[display(fmt = "symbol {:?} has a zero frequency", symbol)]
    MalformedFrequency { symbol: char },
}

impl std::error::Error for HuffmanError {}
