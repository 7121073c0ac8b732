//! Content-type table
//!
//! Maps file extensions to the MIME type sent in `Content-Type`. The entry
//! browsers are strict about is `wasm`: WebAssembly modules must be served
//! as `application/wasm` for `instantiateStreaming` to accept them.

/// Look up the Content-Type for a file extension.
///
/// Extensions are matched exactly as they appear in the path (lowercase
/// keys, case-sensitive); anything unknown falls back to
/// `application/octet-stream`.
///
/// # Examples
/// ```
/// use staticd::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("wasm")), "application/wasm");
/// assert_eq!(content_type_for(Some("mjs")), "application/javascript");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and styles
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and modules
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Media
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Archives and documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasm_override_is_present() {
        assert_eq!(content_type_for(Some("wasm")), "application/wasm");
    }

    #[test]
    fn frontend_module_types() {
        assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("js")), "application/javascript");
        assert_eq!(content_type_for(Some("mjs")), "application/javascript");
        assert_eq!(content_type_for(Some("css")), "text/css");
        assert_eq!(content_type_for(Some("png")), "image/png");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(content_type_for(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(content_type_for(Some("WASM")), "application/octet-stream");
    }
}
