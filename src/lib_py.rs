#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "python")]
#[pyfunction(signature = (string, script_converter="guru_latn", normalize=false), text_signature = "(string, script_converter='guru_latn', normalize=False)")]
/// Converts Unicode Gurmukhi to another script.
///
/// Parameters
/// ----------
/// string : str
///     Input Unicode Gurmukhi text.
/// script_converter : str
///     One of "guru_latn" (transliteration) or "guru_latn_pa" (transcription).
/// normalize : bool
///     NFC-normalize and recompose nukta letters first.
///
/// Raises
/// ------
/// ValueError
///     If `script_converter` is not a known converter.
fn convert(string: &str, script_converter: &str, normalize: bool) -> PyResult<String> {
    let options = crate::Options { normalize };
    crate::convert_with(string, script_converter, &options)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

#[cfg(feature = "python")]
#[pyfunction(signature = (string), text_signature = "(string)")]
/// Converts Unicode Gurmukhi to Gurbani Akhar ASCII.
fn ascii(string: &str) -> String {
    crate::ascii(string)
}

#[cfg(feature = "python")]
#[pymodule]
fn gurmukhi_utils(m: &Bound<PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(ascii, m)?)?;
    let translators: Vec<&str> = crate::Converter::ALL.iter().map(|c| c.name()).collect();
    m.add("TRANSLATORS", translators)?;
    let version = env!("CARGO_PKG_VERSION");
    m.setattr("__version__", version)?;
    Ok(())
}
