//! Logical error codes returned in response bodies.
//!
//! These are independent of the HTTP status: a `404` can carry either
//! [`ErrorCode::MemoNotFound`] or [`ErrorCode::NoMsg`] depending on the
//! operation that missed.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError,
    DbErr,
    MemoNotFound,
    NoMsg,
    InvalidParam,
}

impl ErrorCode {
    /// Integer value written to the wire.
    pub const fn as_i32(self) -> i32 {
        match self {
            ErrorCode::NoError => 0,
            ErrorCode::DbErr => 1,
            ErrorCode::MemoNotFound => 2,
            ErrorCode::NoMsg => 3,
            ErrorCode::InvalidParam => 4,
        }
    }

    /// Fixed human-readable message for the code.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::NoError => "success",
            ErrorCode::DbErr => "database error",
            ErrorCode::MemoNotFound => "memo not found",
            ErrorCode::NoMsg => "no such message",
            ErrorCode::InvalidParam => "invalid request parameters",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_stable() {
        assert_eq!(ErrorCode::NoError.as_i32(), 0);
        assert_eq!(ErrorCode::DbErr.as_i32(), 1);
        assert_eq!(ErrorCode::MemoNotFound.as_i32(), 2);
        assert_eq!(ErrorCode::NoMsg.as_i32(), 3);
        assert_eq!(ErrorCode::InvalidParam.as_i32(), 4);
    }

    #[test]
    fn not_found_codes_have_distinct_messages() {
        assert_eq!(ErrorCode::MemoNotFound.message(), "memo not found");
        assert_eq!(ErrorCode::NoMsg.message(), "no such message");
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_value(ErrorCode::MemoNotFound).unwrap();
        assert_eq!(json, serde_json::json!(2));
    }
}
