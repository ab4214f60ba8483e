//! Placeholder file content and the commit message template.

use chrono::Local;

/// Generates the default placeholder script content.
///
/// The header carries the author and a local timestamp so every run produces
/// a distinct file body.
#[must_use]
pub fn placeholder_script(author: &str) -> String {
    let now = Local::now();
    format!(
        "# Author: {author}\n\
         # Date: {}\n\
         # Description: This script is an auto-generated placeholder.\n\
         \n\
         print(\"This is an auto-generated Python script.\")\n",
        now.format("%Y-%m-%d %H:%M:%S")
    )
}

/// The fixed commit message for a given target filename.
#[must_use]
pub fn commit_message(file_name: &str) -> String {
    format!("Automated commit: Added {file_name} with a placeholder content")
}
