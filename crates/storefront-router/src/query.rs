//! Query-string parsing.

use percent_encoding::percent_decode_str;

use crate::QueryParams;

/// The path part of a URL: everything before the first `?` or `#`.
pub fn path_without_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Parse the query string of a URL into a flat map.
///
/// Returns an empty map when the URL has no `?`.
pub fn parse_query(url: &str) -> QueryParams {
    match url.split_once('?') {
        Some((_, rest)) => {
            let query = rest.split_once('#').map_or(rest, |(q, _)| q);
            parse_query_string(query)
        }
        None => QueryParams::new(),
    }
}

/// Parse `a=1&b=two` into a flat map.
///
/// Keys and values are percent-decoded with `+` read as a space. A key
/// without `=` maps to an empty value; for repeated keys the last wins.
pub fn parse_query_string(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_query() {
        assert_eq!(path_without_query("/product/1/?a=b"), "/product/1/");
        assert_eq!(path_without_query("/#top"), "/");
        assert_eq!(path_without_query("/plain"), "/plain");
    }

    #[test]
    fn test_parse_query() {
        let query = parse_query("/?search=%EC%A0%A4%EB%A6%AC&sort=price_desc&limit=10");
        assert_eq!(query["search"], "젤리");
        assert_eq!(query["sort"], "price_desc");
        assert_eq!(query["limit"], "10");
    }

    #[test]
    fn test_no_query() {
        assert!(parse_query("/product/1/").is_empty());
        assert!(parse_query("/?").is_empty());
    }

    #[test]
    fn test_plus_and_flags() {
        let query = parse_query_string("search=steel+mug&debug&category1=%EC%83%9D%ED%99%9C%2F%EA%B1%B4%EA%B0%95");
        assert_eq!(query["search"], "steel mug");
        assert_eq!(query["debug"], "");
        assert_eq!(query["category1"], "생활/건강");
    }

    #[test]
    fn test_last_value_wins() {
        let query = parse_query_string("page=1&page=3");
        assert_eq!(query["page"], "3");
    }

    #[test]
    fn test_fragment_ignored() {
        let query = parse_query("/?page=2#grid");
        assert_eq!(query["page"], "2");
    }
}
