//! Gurmukhi script conversion.
//!
//! Some script converters are lossless and others are lossy. Transliteration
//! (`guru_latn`) aims for a reversible mapping back to Unicode Gurmukhi;
//! transcription (`guru_latn_pa`) aims to represent the spoken word.
//!
//! ```
//! use gurmukhi_utils::{convert, Converter};
//!
//! assert_eq!(convert("ਸਬਦ", "guru_latn")?, "sabad");
//! assert_eq!(Converter::LatinStrict.convert("੧੨੩"), "123");
//! # Ok::<(), gurmukhi_utils::Error>(())
//! ```

// Include Python bindings when building with the `python` feature.
#[cfg(feature = "python")]
mod lib_py;

mod ascii;
mod converter;
mod error;
pub mod letters;
pub mod mukta;
mod normalize;
mod substitute;

pub use ascii::{ascii, ascii_with, reorder_sihari};
pub use converter::{expand_ik_oankar, Converter, Options};
pub use error::{Error, Result};

/// Converts `input` with the converter named `converter` (`"guru_latn"` or
/// `"guru_latn_pa"`).
///
/// Unknown code points are never an error and pass through unchanged; only an
/// unknown converter name is rejected, before any work is done.
pub fn convert(input: &str, converter: &str) -> Result<String> {
    let converter: Converter = converter.parse()?;
    Ok(converter.convert(input))
}

/// [`convert`] with explicit [`Options`].
pub fn convert_with(input: &str, converter: &str, options: &Options) -> Result<String> {
    let converter: Converter = converter.parse()?;
    Ok(converter.convert_with(input, options))
}
