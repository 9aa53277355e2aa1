//! Search and filter controls.

use storefront_catalog::{AppliedFilters, CategoryTree, SortOption};

use super::{html_escape, render_category_nav};

/// Page sizes offered in the limit select.
pub const LIMIT_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Render the search input, category filter, and sort/limit selects.
pub fn render_search_bar(filters: &AppliedFilters, limit: u32, categories: &CategoryTree) -> String {
    let limit_options: String = LIMIT_OPTIONS
        .iter()
        .map(|&value| {
            format!(
                r#"<option value="{value}"{}>{value}개</option>"#,
                selected(value == limit)
            )
        })
        .collect();

    let sort_options: String = SortOption::ALL
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                option.as_str(),
                selected(*option == filters.sort),
                option.display_name()
            )
        })
        .collect();

    format!(
        r#"<div class="bg-white rounded-lg shadow-sm border border-gray-200 p-4 mb-4">
  <div class="mb-4">
    <div class="relative">
      <input type="text" id="search-input" placeholder="상품명을 검색해보세요..." value="{search}" class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500">
    </div>
  </div>
  <div class="space-y-3">
    {category_nav}
    <div class="flex gap-2 items-center justify-between">
      <div class="flex items-center gap-2">
        <label class="text-sm text-gray-600">개수:</label>
        <select id="limit-select" class="text-sm border border-gray-300 rounded px-2 py-1">
          {limit_options}
        </select>
      </div>
      <div class="flex items-center gap-2">
        <label class="text-sm text-gray-600">정렬:</label>
        <select id="sort-select" class="text-sm border border-gray-300 rounded px-2 py-1">
          {sort_options}
        </select>
      </div>
    </div>
  </div>
</div>"#,
        search = html_escape(&filters.search),
        category_nav = render_category_nav(categories, &filters.category1, &filters.category2),
        limit_options = limit_options,
        sort_options = sort_options,
    )
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}
