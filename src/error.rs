use std::num::TryFromIntError;

use snafu::Location;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid argument, detail: {}", detail))]
    InvalidArgument {
        detail: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display(
        "Incompatible size, storage len: {} is not a multiple of item size: {}",
        storage_len,
        item_size
    ))]
    IncompatibleSize {
        storage_len: usize,
        item_size: usize,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Failed to convert int, from {} to {}", from, to))]
    TryFromInt {
        from: String,
        to: String,
        source: TryFromIntError,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
