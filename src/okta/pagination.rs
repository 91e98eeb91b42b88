//! Cursor pagination over Okta list endpoints.
//!
//! Okta returns one page per request and advertises the next one in a
//! `Link: <url>; rel="next"` response header. [`paginate`] turns that into a
//! lazy record stream: the next page is requested only once every record of
//! the current page has been consumed.

use super::api::RecordStream;
use super::client::OktaHttp;
use crate::error::{ApiError, ApiResult};
use futures::{StreamExt, TryStreamExt, stream};
use log::debug;
use reqwest::Url;
use reqwest::header::{HeaderMap, LINK};
use serde_json::Value;

/// One decoded page of records plus the cursor to the following page.
#[derive(Debug)]
pub(crate) struct Page {
    pub records: Vec<Value>,
    pub next: Option<Url>,
}

/// Stream every record reachable from `first`, page by page.
pub(crate) fn paginate(http: OktaHttp, first: Url) -> RecordStream {
    stream::try_unfold(Some(first), move |cursor| next_page(http.clone(), cursor))
        .map_ok(|records| stream::iter(records.into_iter().map(Ok::<Value, ApiError>)))
        .try_flatten()
        .boxed()
}

async fn next_page(
    http: OktaHttp,
    cursor: Option<Url>,
) -> ApiResult<Option<(Vec<Value>, Option<Url>)>> {
    let Some(url) = cursor else {
        return Ok(None);
    };

    let page = http.fetch_page(url).await?;
    debug!(
        "Fetched page of {} records, more pages: {}",
        page.records.len(),
        page.next.is_some()
    );
    Ok(Some((page.records, page.next)))
}

/// Extract the `rel="next"` target from the `Link` headers, if any.
///
/// Okta may send several `Link` headers, and a single header may carry
/// several comma separated entries.
pub(crate) fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(parse_next_entry)
}

fn parse_next_entry(entry: &str) -> Option<String> {
    let mut parts = entry.split(';');
    let target = parts.next()?.trim();
    let target = target.strip_prefix('<')?.strip_suffix('>')?;

    let is_next = parts.any(|param| {
        let param = param.trim();
        match param.split_once('=') {
            Some((name, value)) => {
                name.trim().eq_ignore_ascii_case("rel")
                    && value
                        .trim()
                        .trim_matches('"')
                        .split_whitespace()
                        .any(|rel| rel.eq_ignore_ascii_case("next"))
            }
            None => false,
        }
    });

    is_next.then(|| target.to_string())
}
