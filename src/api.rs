//! Wishlist REST Client
//!
//! Frontend bindings to the wishlist CRUD backend. Components receive the
//! client through the [`WishlistApi`] trait so tests can substitute a double.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config::get_configuration;
use crate::models::Wishlist;

/// Failures surfaced by the REST client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable response reached us (transport failure or undecodable body).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Server(u16),
    /// The backend reports no resource under the requested id.
    #[error("wishlist not found")]
    NotFound,
}

/// The five REST operations the UI depends on.
///
/// No retries, no caching; each call maps one-to-one onto a request.
pub trait WishlistApi {
    async fn list_all(&self) -> Result<Vec<Wishlist>, ApiError>;
    async fn get_one(&self, id: &str) -> Result<Wishlist, ApiError>;
    async fn create(&self, wishlist: &Wishlist) -> Result<(), ApiError>;
    async fn update(&self, wishlist: &Wishlist) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Request body for `PUT /wishlists/{id}`: only the mutable fields.
#[derive(Serialize)]
struct UpdateWishlistBody<'a> {
    name: &'a str,
}

/// [`WishlistApi`] implementation over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWishlistApi {
    api_url: String,
}

impl HttpWishlistApi {
    pub fn new() -> Self {
        Self {
            api_url: format!("{}/wishlists", get_configuration().rest_url),
        }
    }
}

impl Default for HttpWishlistApi {
    fn default() -> Self {
        Self::new()
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    match response.status() {
        status if (200..300).contains(&status) => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Server(status)),
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl WishlistApi for HttpWishlistApi {
    async fn list_all(&self) -> Result<Vec<Wishlist>, ApiError> {
        let response = Request::get(&self.api_url)
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response)?;
        response.json().await.map_err(network_error)
    }

    async fn get_one(&self, id: &str) -> Result<Wishlist, ApiError> {
        let url = format!("{}/{}", self.api_url, id);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        check_status(&response)?;
        response.json().await.map_err(network_error)
    }

    async fn create(&self, wishlist: &Wishlist) -> Result<(), ApiError> {
        let response = Request::post(&self.api_url)
            .json(wishlist)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response)
    }

    async fn update(&self, wishlist: &Wishlist) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.api_url, wishlist.id);
        let body = UpdateWishlistBody {
            name: &wishlist.name,
        };
        let response = Request::put(&url)
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.api_url, id);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        check_status(&response)
    }
}
