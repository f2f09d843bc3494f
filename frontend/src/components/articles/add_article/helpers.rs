//! Browser glue for the add-article modal: file pickers and image previews.

use gloo_file::futures::read_as_data_url;
use gloo_file::FileReadError;
use web_sys::{Event, File, HtmlInputElement};
use yew::html::TargetCast;

/// Every file chosen in the `<input type="file">` that fired `event`.
pub fn selected_files(event: &Event) -> Vec<File> {
    let input: HtmlInputElement = event.target_unchecked_into();
    match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}

/// The first file chosen in the picker that fired `event`, if any.
pub fn first_selected_file(event: &Event) -> Option<File> {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.files().and_then(|list| list.get(0))
}

/// Reads `file` into a `data:` URL for the `<img>` preview.
pub async fn read_preview(file: File) -> Result<String, FileReadError> {
    let file = gloo_file::File::from(file);
    read_as_data_url(&file).await
}
