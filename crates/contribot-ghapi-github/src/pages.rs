//! Page-by-page traversal of list endpoints.

use contribot_ghapi_interface::pagination::parse_next_link;
use futures::{
    stream::{self, BoxStream},
    StreamExt,
};
use http::{header, StatusCode};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::errors::GitHubError;

/// Lazily fetch pages, following the next link of each response until none is given.
pub(crate) fn paginate<'a, T>(
    client: &'a Client,
    first_url: String,
) -> BoxStream<'a, Result<Vec<T>, GitHubError>>
where
    T: DeserializeOwned + Send + 'a,
{
    stream::try_unfold(Some(first_url), move |next_url| async move {
        match next_url {
            Some(url) => fetch_page(client, &url).await.map(Some),
            None => Ok(None),
        }
    })
    .boxed()
}

async fn fetch_page<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<(Vec<T>, Option<String>), GitHubError> {
    let response = ensure_success(client.get(url).send().await?, url)?;
    let next_url = response
        .headers()
        .get(header::LINK)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_next_link);

    Ok((response.json::<Vec<T>>().await?, next_url))
}

/// Turn a non-2xx response into an error.
pub(crate) fn ensure_success(response: Response, url: &str) -> Result<Response, GitHubError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(GitHubError::NotFoundError { url: url.into() }),
        status => Err(GitHubError::StatusError {
            status: status.as_u16(),
            url: url.into(),
        }),
    }
}
