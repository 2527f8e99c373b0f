use thiserror::Error;

/// Failure of any stage of the provider pipeline.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Error fetching data: {status}")]
    Fetch { status: u16 },

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// A list entry that doesn't split into exactly `host` and `port`.
    #[error("{}", unpack_message(.found))]
    Parse {
        line: usize,
        entry: String,
        found: usize,
    },
}

fn unpack_message(found: &usize) -> String {
    if *found < 2 {
        format!("not enough values to unpack (expected 2, got {found})")
    } else {
        "too many values to unpack (expected 2)".to_string()
    }
}

pub type Result<T, E = ProviderError> = std::result::Result<T, E>;
