//! Review coordinators.

use serde::Serialize;
use shopfront_core::{ProductId, Rating, ReviewId};
use tracing::instrument;

use crate::cache::Intent;
use crate::error::ApiError;
use crate::models::Review;

use super::{ApiClient, unwrap_entity};

/// Fields for creating or updating a review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDraft {
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Serialize)]
struct CreateReview<'a> {
    product_id: ProductId,
    #[serde(flatten)]
    draft: &'a ReviewDraft,
}

impl ApiClient {
    /// Fetch all reviews for a product into the reviews slice.
    ///
    /// Public: review listings are visible to unauthenticated visitors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown product.
    #[instrument(skip_all, fields(product = %product_id))]
    pub async fn fetch_product_reviews(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Review>, ApiError> {
        let value = self
            .execute(
                self.public()
                    .get(self.url(&format!("/api/reviews/product/{product_id}"))),
            )
            .await?;
        let reviews: Vec<Review> = unwrap_entity(&value, "reviews")?;
        self.dispatch(Intent::SetReviews(reviews.clone()));
        Ok(reviews)
    }

    /// Create a review for a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown product,
    /// [`ApiError::Validation`] for a rejected rating or comment.
    #[instrument(skip_all, fields(product = %product_id))]
    pub async fn create_review(
        &self,
        product_id: ProductId,
        draft: &ReviewDraft,
    ) -> Result<Review, ApiError> {
        let value = self
            .execute(
                self.http()
                    .post(self.url("/api/reviews"))
                    .json(&CreateReview { product_id, draft }),
            )
            .await?;
        let review: Review = unwrap_entity(&value, "review")?;
        self.dispatch(Intent::AddReview(review.clone()));
        Ok(review)
    }

    /// Update a review. Only the review's author may do this.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a review that does not exist or
    /// belongs to another author.
    #[instrument(skip_all, fields(review = %id))]
    pub async fn update_review(&self, id: ReviewId, draft: &ReviewDraft) -> Result<Review, ApiError> {
        let value = self
            .execute(
                self.http()
                    .put(self.url(&format!("/api/reviews/{id}")))
                    .json(draft),
            )
            .await?;
        let review: Review = unwrap_entity(&value, "review")?;
        self.dispatch(Intent::UpdateReview(review.clone()));
        Ok(review)
    }

    /// Delete a review. Only the review's author may do this.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a review that does not exist or
    /// belongs to another author.
    #[instrument(skip_all, fields(review = %id))]
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), ApiError> {
        self.execute(self.http().delete(self.url(&format!("/api/reviews/{id}"))))
            .await?;
        self.dispatch(Intent::RemoveReview(id));
        Ok(())
    }
}
