//
//  bit
//  api/pullrequests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request listing for Bitbucket Cloud.
//!
//! Only the `id` and `title` of each pull request are requested, and only
//! the first page of results is read.

use serde::Deserialize;

use super::{BitbucketClient, HttpError};

/// Fields requested from the pull request endpoint.
const PULL_REQUEST_FIELDS: &str = "values.id,values.title";

/// A pull request as listed by `bit pr list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// Identifier assigned by Bitbucket, unique within the repository
    pub id: u64,
    /// Pull request title
    pub title: String,
}

/// One page of a Bitbucket Cloud collection.
///
/// Bitbucket also returns `page`, `pagelen` and `next`; they are ignored
/// because only the first page is read.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page
    pub values: Vec<T>,
}

impl BitbucketClient {
    /// Lists the pull requests of `repository` (`workspace/repo-slug`).
    ///
    /// Returns the first page in the order the API sends it.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpError`] if the request fails, the status is not 2xx,
    /// or the body is not a `{"values": [...]}` document.
    pub async fn get_pull_requests(&self, repository: &str) -> Result<Vec<PullRequest>, HttpError> {
        let path = format!(
            "/repositories/{}/pullrequests?fields={}",
            repository, PULL_REQUEST_FIELDS
        );
        let page: PaginatedResponse<PullRequest> = self.get(&path).await?;
        Ok(page.values)
    }
}
