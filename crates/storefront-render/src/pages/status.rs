//! 404 and error documents.

use crate::head::HeadContent;
use crate::page::PageContent;
use crate::sections::render_status_page;

/// Not-found page.
pub fn not_found_page() -> PageContent {
    PageContent::new(
        HeadContent::titled("404").render(),
        render_status_page("404", "페이지를 찾을 수 없습니다."),
    )
}

/// Error page carrying the failure message.
pub fn error_page(message: &str) -> PageContent {
    PageContent::new(
        HeadContent::titled("오류 발생").render(),
        render_status_page("오류 발생", message),
    )
}
