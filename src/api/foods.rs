//! Food Endpoints
//!
//! `FoodApi` is the seam the dashboard controller talks to; `HttpFoodApi`
//! implements it against the conventional `/foods` REST routes.

use async_trait::async_trait;

use super::HttpClient;
use crate::error::ApiResult;
use crate::models::{Food, FoodId, NewFood};

pub const FOODS_PATH: &str = "/foods";

pub fn food_path(id: FoodId) -> String {
    format!("{}/{}", FOODS_PATH, id)
}

/// CRUD operations on the food resource
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// `POST /foods`, returns the record with its assigned id
    async fn create_food(&self, food: &NewFood) -> ApiResult<Food>;

    /// `PUT /foods/{id}` with the full record
    async fn update_food(&self, food: &Food) -> ApiResult<Food>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: FoodId) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    http: HttpClient,
}

impl HttpFoodApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        self.http.get(FOODS_PATH).await
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
        self.http.post(FOODS_PATH, food).await
    }

    async fn update_food(&self, food: &Food) -> ApiResult<Food> {
        self.http.put(&food_path(food.id), food).await
    }

    async fn delete_food(&self, id: FoodId) -> ApiResult<()> {
        self.http.delete(&food_path(id)).await
    }
}
