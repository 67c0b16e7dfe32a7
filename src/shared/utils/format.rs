//! Display helpers for document sizes and file types

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size: "0 Bytes", "1.5 KB", "1 MB"
///
/// The unit is floor(log1024(bytes)), capped at GB. The scaled value is
/// rounded to two decimals and printed without trailing zeros.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let unit = (bytes.ilog(1024) as usize).min(SIZE_UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Text after the last dot, or "" when there is no usable extension
/// ("noext", ".bashrc", "trailing.")
pub fn file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) if index > 0 => &filename[index + 1..],
        _ => "",
    }
}

/// Icon shown next to a document
pub fn file_icon(filename: &str) -> &'static str {
    match file_extension(filename).to_ascii_lowercase().as_str() {
        "pdf" => "📄",
        "txt" => "📝",
        "doc" | "docx" => "📘",
        "csv" => "📊",
        "md" => "📋",
        "html" | "htm" => "🌐",
        _ => DEFAULT_FILE_ICON,
    }
}

pub const DEFAULT_FILE_ICON: &str = "📄";
