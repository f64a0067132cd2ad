//! Spreadsheet-friendly export of grouping results.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use huddle_core::Group;

use crate::error::GroupResult;

/// Media type of the exported text.
pub const EXPORT_MEDIA_TYPE: &str = "text/csv;charset=utf-8";

/// Header row of the export.
pub const EXPORT_HEADER: &str = "GroupName,MemberName";

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// Render groups as CSV, one row per group member.
///
/// The text starts with a UTF-8 byte-order mark so spreadsheet tools pick the
/// right encoding, followed by the header row. Data fields are always quoted
/// and every row ends with `\n`. No groups means a header-only export.
pub fn to_delimited_text(groups: &[Group]) -> GroupResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for group in groups {
        for member in &group.members {
            writer.write_record([group.name.as_str(), member.as_str()])?;
        }
    }

    let rows = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))?;
    let mut out = format!("{BYTE_ORDER_MARK}{EXPORT_HEADER}\n");
    out.push_str(&String::from_utf8(rows)?);
    Ok(out)
}

/// Suggested file name for an export made on `date`.
pub fn default_file_name(date: NaiveDate) -> String {
    format!("groups_{}.csv", date.format("%Y-%m-%d"))
}
