//! `$DWGCODEPAGE` to encoding mapping
//!
//! Drawings older than AutoCAD 2007 store non-ASCII text in the code page
//! named by the header variable `$DWGCODEPAGE`. The reader uses it as the
//! fallback decoding for lines that are not valid UTF-8.

use encoding_rs::Encoding;

/// First `$ACADVER` that always stores text as UTF-8 (AutoCAD 2007)
pub const UNICODE_VERSION: &str = "AC1021";

/// Encoding for a `$DWGCODEPAGE` value.
///
/// Returns `None` for code pages that need no transcoding (ASCII, UTF-8).
/// Unrecognised names fall back to Windows-1252.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase();

    let encoding = match name.as_str() {
        "ascii" | "utf-8" | "utf8" | "unicode" => return None,

        "gb2312" | "ansi_936" => encoding_rs::GBK,
        "big5" | "ansi_950" => encoding_rs::BIG5,
        "korean" | "ansi_949" | "johab" => encoding_rs::EUC_KR,
        "ansi_932" => encoding_rs::SHIFT_JIS,

        "dos855" | "dos866" => encoding_rs::IBM866,
        "dos852" => encoding_rs::WINDOWS_1250,
        "dos857" => encoding_rs::WINDOWS_1254,
        "dos869" => encoding_rs::WINDOWS_1253,

        // ansi_874, ansi_1250 ... ansi_1258
        ansi if ansi.starts_with("ansi_") => {
            let label = format!("windows-{}", &ansi[5..]);
            Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252)
        }

        // iso8859-2, iso_8859-15, koi8-r ...
        other => {
            let label = other.replacen("iso_", "iso-", 1).replacen("iso8859", "iso-8859", 1);
            Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252)
        }
    };

    Some(encoding)
}

/// Check whether an `$ACADVER` value always stores text as UTF-8
pub fn is_unicode_version(version: &str) -> bool {
    let version = version.trim();
    version.starts_with("AC") && version >= UNICODE_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_code_pages() {
        assert_eq!(encoding_from_code_page("ANSI_1252"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_from_code_page("ansi_1251"), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(encoding_from_code_page("ANSI_874"), Some(encoding_rs::WINDOWS_874));
    }

    #[test]
    fn test_iso_and_koi_labels() {
        assert_eq!(encoding_from_code_page("ISO8859-2"), Some(encoding_rs::ISO_8859_2));
        assert_eq!(encoding_from_code_page("iso_8859-15"), Some(encoding_rs::ISO_8859_15));
        assert_eq!(encoding_from_code_page("KOI8-R"), Some(encoding_rs::KOI8_R));
    }

    #[test]
    fn test_no_transcoding() {
        assert_eq!(encoding_from_code_page("ASCII"), None);
        assert_eq!(encoding_from_code_page("UTF-8"), None);
    }

    #[test]
    fn test_asian_and_dos_code_pages() {
        assert_eq!(encoding_from_code_page("GB2312"), Some(encoding_rs::GBK));
        assert_eq!(encoding_from_code_page("ANSI_932"), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(encoding_from_code_page("DOS866"), Some(encoding_rs::IBM866));
        assert_eq!(encoding_from_code_page("dos437"), Some(encoding_rs::WINDOWS_1252));
    }

    #[test]
    fn test_unknown_falls_back_to_windows_1252() {
        assert_eq!(encoding_from_code_page("SOMETHING"), Some(encoding_rs::WINDOWS_1252));
    }

    #[test]
    fn test_unicode_versions() {
        assert!(is_unicode_version("AC1021"));
        assert!(is_unicode_version("AC1032"));
        assert!(!is_unicode_version("AC1015"));
        assert!(!is_unicode_version(""));
    }
}
