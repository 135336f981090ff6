use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use pgcopy_codec::{DecodeError, DecodeOptions, EmptyHex, NULL_SENTINEL, UnknownEscape};

fn decode_error_to_py(e: DecodeError) -> PyErr {
    PyValueError::new_err(format!("{}:{}", e.kind.as_str(), e.position))
}

/// Decode a value from a `COPY` stream. Returns `None` for `\N`.
#[pyfunction]
#[pyo3(signature = (value, *, strict = false, lenient_hex = false))]
fn decode_copy_value(value: &str, strict: bool, lenient_hex: bool) -> PyResult<Option<String>> {
    let options = DecodeOptions::new()
        .unknown_escape(if strict {
            UnknownEscape::Reject
        } else {
            UnknownEscape::PassThrough
        })
        .empty_hex(if lenient_hex && !strict {
            EmptyHex::Literal
        } else {
            EmptyHex::Reject
        });

    let decoded = pgcopy_codec::decode_copy_value_with(value, &options).map_err(decode_error_to_py)?;
    Ok(decoded.map(std::borrow::Cow::into_owned))
}

/// Encode a value for a `COPY` stream. `None` becomes `\N`.
#[pyfunction]
#[pyo3(signature = (value))]
fn encode_copy_value(value: Option<&str>) -> String {
    pgcopy_codec::encode_copy_value(value).into_owned()
}

#[pymodule]
fn _pgcopy_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("POSTGRES_COPY_NULL_VALUE", NULL_SENTINEL)?;
    m.add_function(wrap_pyfunction!(decode_copy_value, m)?)?;
    m.add_function(wrap_pyfunction!(encode_copy_value, m)?)?;
    Ok(())
}
