use crate::error::Error;

/// The outcome of a push. A push never fails, it only reports whether the
/// oldest item had to be dropped to make room.
#[must_use]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Push {
    /// The item took a free slot.
    Inserted,
    /// The buffer was full, the oldest item was evicted.
    Overwritten,
}

impl Push {
    pub fn is_overwritten(self) -> bool {
        matches!(self, Push::Overwritten)
    }
}

/// The informational status of an operation on the ring buffer.
///
/// Neither `Empty` nor `Overwritten` is an error: `Empty` means there was
/// nothing to read and no state changed, `Overwritten` means a push
/// succeeded at the cost of the oldest item.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Status {
    Ok,
    Empty,
    Overwritten,
}

impl From<Push> for Status {
    fn from(push: Push) -> Self {
        match push {
            Push::Inserted => Status::Ok,
            Push::Overwritten => Status::Overwritten,
        }
    }
}

/// The numeric status codes returned across the C boundary.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StatusCode {
    Fail = -1,
    Ok = 0,
    Empty = 1,
    Overwritten = 2,
    NullArgs = 3,
}

impl TryFrom<i32> for StatusCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, String> {
        match value {
            -1 => Ok(StatusCode::Fail),
            0 => Ok(StatusCode::Ok),
            1 => Ok(StatusCode::Empty),
            2 => Ok(StatusCode::Overwritten),
            3 => Ok(StatusCode::NullArgs),
            _ => Err(format!("Invalid status code: {}", value)),
        }
    }
}

impl From<Status> for StatusCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => StatusCode::Ok,
            Status::Empty => StatusCode::Empty,
            Status::Overwritten => StatusCode::Overwritten,
        }
    }
}

impl From<Push> for StatusCode {
    fn from(push: Push) -> Self {
        Status::from(push).into()
    }
}

/// Null pointers are rejected before an [`Error`] can be built, so every
/// error maps to `Fail`.
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidArgument { .. }
            | Error::IncompatibleSize { .. }
            | Error::TryFromInt { .. } => StatusCode::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use snafu::ResultExt;

    use crate::convert_num;
    use crate::error;
    use crate::ringbuf::raw::RawRingbuf;
    use crate::status::Push;
    use crate::status::Status;
    use crate::status::StatusCode;

    #[test]
    fn test_try_from() {
        assert_eq!(StatusCode::try_from(-1).unwrap(), StatusCode::Fail);
        assert_eq!(StatusCode::try_from(0).unwrap(), StatusCode::Ok);
        assert_eq!(StatusCode::try_from(1).unwrap(), StatusCode::Empty);
        assert_eq!(StatusCode::try_from(2).unwrap(), StatusCode::Overwritten);
        assert_eq!(StatusCode::try_from(3).unwrap(), StatusCode::NullArgs);
        assert!(StatusCode::try_from(4).is_err());
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(StatusCode::Fail as i32, -1);
        assert_eq!(StatusCode::Ok as i32, 0);
        assert_eq!(StatusCode::Empty as i32, 1);
        assert_eq!(StatusCode::Overwritten as i32, 2);
        assert_eq!(StatusCode::NullArgs as i32, 3);
    }

    #[test]
    fn test_push_into_status() {
        assert_eq!(Status::from(Push::Inserted), Status::Ok);
        assert_eq!(Status::from(Push::Overwritten), Status::Overwritten);
        assert_eq!(StatusCode::from(Push::Overwritten), StatusCode::Overwritten);
        assert!(Push::Overwritten.is_overwritten());
        assert!(!Push::Inserted.is_overwritten());
    }

    #[test]
    fn test_error_into_status_code() {
        let mut storage = [0u8; 8];
        let mut ringbuf = RawRingbuf::new(&mut storage, 4).unwrap();

        let err = ringbuf.push(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, error::Error::InvalidArgument { .. }));
        assert_eq!(StatusCode::from(&err), StatusCode::Fail);

        let err = RawRingbuf::new(&mut [0u8; 11], 4).err().unwrap();
        assert!(matches!(err, error::Error::IncompatibleSize { .. }));
        assert_eq!(StatusCode::from(&err), StatusCode::Fail);

        let err = convert_num!(u64::MAX, u32).err().unwrap();
        assert_eq!(StatusCode::from(&err), StatusCode::Fail);
    }
}
