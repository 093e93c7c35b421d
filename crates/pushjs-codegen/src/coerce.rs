//! Type coercion matrix
//!
//! Maps a (source, target) type pair to the JavaScript that converts a value
//! of the source type. Pairs without a rule are not representable.

use crate::names::receiver;
use pushjs_ir::DataType;

/// Convert `text`, a JavaScript expression of type `from`, to type `to`.
///
/// `is_date_temporary` is set when `text` names a temporary bound by
/// `ToDate`; its string form is then cut down to the calendar day.
/// Identical types pass the text through unchanged.
pub fn coerce(text: &str, from: DataType, to: DataType, is_date_temporary: bool) -> Option<String> {
    use DataType::*;

    if from == to {
        return Some(text.to_string());
    }

    let code = match to {
        Float | Double if from == String => format!("parseFloat({})", text),
        Float | Double if from.is_numeric() => format!("Number({})", text),

        Short | Integer | Long if from == String => format!("parseInt({}, 10)", text),
        Short | Integer | Long if from.is_numeric() => format!("Number({})", text),

        Boolean => format!("Boolean({})", text),

        String if from.is_numeric() || from == Timestamp => {
            format!("{}.toString()", receiver(text))
        }
        String if from == Date && is_date_temporary => {
            format!("{}.toISOString().substring(0, 10)", receiver(text))
        }
        String if from == Date => format!("{}.toISOString()", receiver(text)),

        Timestamp if from == Date => format!("{}.getTime()", receiver(text)),
        Timestamp if from == String || from.is_numeric() => {
            format!("new Date({}).getTime()", text)
        }

        Date if from == String => format!("new Date({})", text),
        Date if from == Timestamp || from.is_numeric() => {
            format!("new Date(parseFloat({}))", text)
        }

        _ => return None,
    };

    Some(code)
}

/// Turn a value into something the `Date` accessors can be called on.
///
/// Dates pass through; strings, epoch timestamps and integral numbers are
/// wrapped in a `Date` constructor. Everything else is rejected.
pub fn to_date_like(text: &str, from: DataType) -> Option<String> {
    match from {
        DataType::Date => Some(text.to_string()),
        DataType::String | DataType::Timestamp => Some(format!("new Date({})", text)),
        t if t.is_integral() => Some(format!("new Date({})", text)),
        _ => None,
    }
}
