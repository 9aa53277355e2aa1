//! Page chrome.

use super::html_escape;
use crate::head::SITE_NAME;

/// Wrap page content in the site header and footer.
///
/// `header_left` is trusted markup; callers escape anything they
/// interpolate into it.
pub fn render_page(header_left: &str, children: &str) -> String {
    format!(
        r#"<div class="min-h-screen bg-gray-50">
  <header class="bg-white shadow-sm sticky top-0 z-40">
    <div class="max-w-md mx-auto px-4 py-4">
      <div class="flex items-center justify-between">
        {header_left}
        <div class="flex items-center space-x-2">
          <button id="cart-icon-btn" class="relative p-2 text-gray-700 hover:text-gray-900 transition-colors" aria-label="장바구니">
            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
              <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z"/>
            </svg>
          </button>
        </div>
      </div>
    </div>
  </header>
  <main class="max-w-md mx-auto px-4 py-4">
    {children}
  </main>
  <footer class="bg-white shadow-sm sticky bottom-0">
    <div class="max-w-md mx-auto py-8 text-center text-gray-500">
      <p>&copy; 2025 항해플러스 프론트엔드 {SITE_NAME}</p>
    </div>
  </footer>
</div>"#
    )
}

/// Site title linking home, for the left side of the header.
pub fn site_title() -> String {
    format!(
        r#"<h1 class="text-xl font-bold text-gray-900"><a href="/" data-link>{SITE_NAME}</a></h1>"#
    )
}

/// Centered status page with a heading, a message and a link home.
pub fn render_status_page(heading: &str, message: &str) -> String {
    format!(
        r#"<div class="min-h-screen bg-gray-50 flex items-center justify-center">
  <div class="text-center">
    <h1 class="text-4xl font-bold text-gray-900 mb-4">{}</h1>
    <p class="text-gray-600 mb-4">{}</p>
    <a href="/" data-link class="text-blue-600 hover:underline">홈으로 돌아가기</a>
  </div>
</div>"#,
        html_escape(heading),
        html_escape(message)
    )
}
