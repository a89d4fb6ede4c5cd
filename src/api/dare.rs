//! Dare Endpoints
//!
//! Typed wrappers for `GET darez` and `POST darez/like/{id}`.

use reqwest::Url;

use super::{HttpResponse, Transport};
use crate::error::ApiError;
use crate::models::{Dare, LikeResponse, LIKE_INCREMENT};
use crate::schema;

const DAREZ_PATH: &str = "darez";

/// Client for the dares API rooted at `base` (which ends in `/`)
#[derive(Debug, Clone)]
pub struct DareClient<T> {
    base: Url,
    transport: T,
}

impl<T: Transport> DareClient<T> {
    pub fn new(base: Url, transport: T) -> Self {
        Self { base, transport }
    }

    /// Fetch the whole collection
    pub async fn list_dares(&self) -> Result<Vec<Dare>, ApiError> {
        let url = self.endpoint(DAREZ_PATH)?;
        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;
        let body = ensure_success(&url, response)?;
        schema::parse_collection(&body).map_err(|source| ApiError::Schema { url, source })
    }

    /// Like one dare; the server answers with the refreshed collection or the dare
    pub async fn like_dare(&self, id: u32) -> Result<LikeResponse, ApiError> {
        let url = self.endpoint(&format!("{DAREZ_PATH}/like/{id}"))?;
        let form = [("like", LIKE_INCREMENT.to_string())];
        let response = self
            .transport
            .post_form(&url, &form)
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;
        let body = ensure_success(&url, response)?;
        schema::parse_like_response(&body, id).map_err(|source| ApiError::Schema { url, source })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::Endpoint {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

fn ensure_success(url: &Url, response: HttpResponse) -> Result<String, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            url: url.clone(),
            status: response.status,
        });
    }
    Ok(response.body)
}
