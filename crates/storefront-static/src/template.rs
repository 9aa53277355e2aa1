//! HTML document template.

use storefront_render::RenderResult;

use crate::manifest::AssetManifest;

/// Serialize the initial data for an inline `<script>`.
///
/// `<` is written as `\u003c` so no string value can close the tag.
pub fn serialize_initial_data(data: &serde_json::Value) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(data)?.replace('<', "\\u003c"))
}

/// Place a rendered page into the full document.
pub fn build_html(rendered: &RenderResult, assets: &AssetManifest) -> Result<String, serde_json::Error> {
    let initial_data = serialize_initial_data(&rendered.initial_data)?;

    let script = assets
        .js
        .as_deref()
        .map(|src| format!(r#"<script type="module" crossorigin src="{src}"></script>"#))
        .unwrap_or_default();
    let stylesheet = assets
        .css
        .as_deref()
        .map(|href| format!(r#"<link rel="stylesheet" crossorigin href="{href}">"#))
        .unwrap_or_default();

    Ok(format!(
        r#"<!doctype html>
<html lang="ko">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <script src="https://cdn.tailwindcss.com"></script>
    {head}
    <script>window.__INITIAL_DATA__ = {initial_data};</script>
    {script}
    {stylesheet}
  </head>
  <body class="bg-gray-50">
    <div id="root">{html}</div>
  </body>
</html>"#,
        head = rendered.head,
        html = rendered.html,
    ))
}
