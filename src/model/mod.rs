mod appointment;
mod pet;
mod purchase;

pub use appointment::{Appointment, ScheduleRequest, UNKNOWN_PET};
pub use pet::Pet;
pub use purchase::{ORDER_COMPLETED, Purchase, PurchaseRequest};

use serde_json::Value;

/// Loose presence check for request fields: `null`, `false`, `0` and `""` count as missing.
pub(crate) fn is_present(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None, false)]
    #[case(Some(Value::Null), false)]
    #[case(Some(json!(false)), false)]
    #[case(Some(json!(0)), false)]
    #[case(Some(json!("")), false)]
    #[case(Some(json!(true)), true)]
    #[case(Some(json!(7)), true)]
    #[case(Some(json!("2024-05-01")), true)]
    #[case(Some(json!([])), true)]
    #[case(Some(json!({})), true)]
    fn test_is_present(#[case] value: Option<Value>, #[case] expected: bool) {
        assert_eq!(is_present(&value), expected);
    }
}
