//! GitHub adapter

use async_trait::async_trait;
use contribot_config::Config;
use contribot_ghapi_interface::{
    types::{GhIssue, GhUser},
    ApiService, Result,
};
use futures::TryStreamExt;
use http::StatusCode;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
    pages::{ensure_success, paginate},
};

const PAGE_SIZE: u32 = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GitHubApiService {
    config: Config,
    client: Client,
}

impl GitHubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let client = get_authenticated_client_builder(&config)?.build()?;
        Ok(Self { config, client })
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn collaborator_check(
        &self,
        owner: &str,
        name: &str,
        username: &str,
    ) -> Result<bool, GitHubError> {
        let url = self.build_url(format!("/repos/{owner}/{name}/collaborators/{username}"));
        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(GitHubError::StatusError {
                status: status.as_u16(),
                url,
            }),
        }
    }

    async fn labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<(), GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            labels: &'a [String],
        }

        let url = self.build_url(format!(
            "/repos/{owner}/{name}/issues/{issue_number}/labels"
        ));
        let response = self
            .client
            .post(&url)
            .json(&Request { labels })
            .send()
            .await?;
        ensure_success(response, &url)?;

        Ok(())
    }

    async fn label_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<(), GitHubError> {
        let base = self.build_url(format!(
            "/repos/{owner}/{name}/issues/{issue_number}/labels"
        ));
        let mut url = Url::parse(&base).map_err(|_| GitHubError::InvalidUrlError {
            url: base.clone(),
        })?;
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrlError { url: base.clone() })?
            .push(label);

        let response = self.client.delete(url.clone()).send().await?;
        ensure_success(response, url.as_str())?;

        Ok(())
    }

    async fn collect_pages<T>(&self, first_url: String) -> Result<Vec<T>, GitHubError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        paginate(&self.client, first_url).try_concat().await
    }
}

#[async_trait]
impl ApiService for GitHubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn repository_collaborator_check(
        &self,
        owner: &str,
        name: &str,
        username: &str,
    ) -> Result<bool> {
        Ok(self.collaborator_check(owner, name, username).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        Ok(self.labels_add(owner, name, issue_number, labels).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_label_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()> {
        Ok(self.label_remove(owner, name, issue_number, label).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn org_members_list(&self, org: &str) -> Result<Vec<GhUser>> {
        let url = self.build_url(format!("/orgs/{org}/members?per_page={PAGE_SIZE}"));
        Ok(self.collect_pages(url).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn issues_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhIssue>> {
        let url = self.build_url(format!(
            "/repos/{owner}/{name}/issues?state=open&per_page={PAGE_SIZE}"
        ));
        Ok(self.collect_pages(url).await?)
    }
}

#[cfg(test)]
mod tests {
    use contribot_ghapi_interface::ApiError;
    use pretty_assertions::assert_eq;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    async fn arrange_service(server: &MockServer) -> GitHubApiService {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.root_url = server.uri();
        config.api.github.token = "abcdef".into();

        GitHubApiService::new(config).unwrap()
    }

    #[tokio::test]
    async fn collaborator_check_status_mapping() {
        let server = MockServer::start().await;
        for (username, status) in [("teamUser", 204), ("extUser", 404), ("flakyUser", 502)] {
            Mock::given(method("GET"))
                .and(path(format!("/repos/le/kolibri/collaborators/{username}")))
                .and(header("authorization", "Bearer abcdef"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;
        }

        let service = arrange_service(&server).await;

        assert!(service
            .repository_collaborator_check("le", "kolibri", "teamUser")
            .await
            .unwrap());
        assert!(!service
            .repository_collaborator_check("le", "kolibri", "extUser")
            .await
            .unwrap());
        assert!(matches!(
            service
                .repository_collaborator_check("le", "kolibri", "flakyUser")
                .await,
            Err(ApiError::UnexpectedStatus { status: 502, .. })
        ));
    }

    #[tokio::test]
    async fn add_label_posts_label_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/le/kolibri/issues/42/labels"))
            .and(body_json(serde_json::json!({
                "labels": ["community-contribution-in-progress"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server).await;
        service
            .issue_labels_add(
                "le",
                "kolibri",
                42,
                &["community-contribution-in-progress".into()],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_label_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/le/kolibri/issues/42/labels"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let service = arrange_service(&server).await;
        assert!(matches!(
            service
                .issue_labels_add("le", "kolibri", 42, &["label".into()])
                .await,
            Err(ApiError::UnexpectedStatus { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn remove_label_maps_missing_label_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(
                "/repos/le/kolibri/issues/42/labels/community-contribution-in-progress",
            ))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/repos/le/kolibri/issues/43/labels/help%20wanted"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server).await;
        assert!(matches!(
            service
                .issue_label_remove("le", "kolibri", 42, "community-contribution-in-progress")
                .await,
            Err(ApiError::NotFound { .. })
        ));
        service
            .issue_label_remove("le", "kolibri", 43, "help wanted")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn org_members_follow_next_links() {
        let server = MockServer::start().await;
        let second_page = format!("{}/orgs/le/members?page=2", server.uri());

        Mock::given(method("GET"))
            .and(path("/orgs/le/members"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"login": "carol"}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/orgs/le/members"))
            .and(query_param("per_page", "100"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header(
                        "link",
                        format!(r#"<{second_page}>; rel="next", <{second_page}>; rel="last""#)
                            .as_str(),
                    )
                    .set_body_json(serde_json::json!([{"login": "alice"}, {"login": "bob"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = arrange_service(&server).await;
        let members = service.org_members_list("le").await.unwrap();
        let expected: Vec<GhUser> = vec!["alice".into(), "bob".into(), "carol".into()];

        assert_eq!(members, expected);
    }

    #[tokio::test]
    async fn open_issues_stop_on_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/le/studio/issues"))
            .and(query_param("state", "open"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = arrange_service(&server).await;
        assert!(matches!(
            service.issues_list_open("le", "studio").await,
            Err(ApiError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
