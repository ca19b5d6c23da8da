//! Pagination helpers.
//!
//! GitHub paginates list endpoints through the `Link` response header, e.g.
//! `<https://api.github.com/orgs/o/members?page=2>; rel="next", <...>; rel="last"`.

/// Extract the URL of the next page from a `Link` header value.
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut segments = entry.split(';');
        let target = segments.next()?.trim();
        let url = target.strip_prefix('<')?.strip_suffix('>')?;

        segments
            .any(is_next_relation)
            .then(|| url.to_string())
    })
}

fn is_next_relation(param: &str) -> bool {
    match param.trim().split_once('=') {
        Some((key, value)) => {
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        }
        None => false,
    }
}
