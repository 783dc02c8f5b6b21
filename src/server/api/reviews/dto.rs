//! Transfer forms for reviews.
use serde::{Deserialize, Serialize};

use crate::db::models::review::{Draft, Review};
use crate::server::errors::CatalogError;

/// Full transfer form of a review.
///
/// `publicationId` is only ever `null` on output, after the reviewed
/// publication was deleted. Input must always name a publication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    /// Name of whoever wrote the review.
    pub reviewer_name: String,
    /// Whether the review recommends the publication.
    pub is_positive: bool,
    /// Review text.
    pub comment: String,
    /// Id of the reviewed publication.
    #[serde(default)]
    pub publication_id: Option<i64>,
}

/// Brief transfer form of a review, used in lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBriefDto {
    /// Store-assigned identifier.
    pub id: i64,
    /// Name of whoever wrote the review.
    pub reviewer_name: String,
    /// Whether the review recommends the publication.
    pub is_positive: bool,
    /// Review text.
    pub comment: String,
}

impl From<&Review> for ReviewDto {
    fn from(review: &Review) -> Self {
        Self {
            reviewer_name: review.reviewer_name.clone(),
            is_positive: review.is_positive,
            comment: review.comment.clone(),
            publication_id: review.publication_id,
        }
    }
}

impl From<&Review> for ReviewBriefDto {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            reviewer_name: review.reviewer_name.clone(),
            is_positive: review.is_positive,
            comment: review.comment.clone(),
        }
    }
}

impl TryFrom<ReviewDto> for Draft {
    type Error = CatalogError;

    fn try_from(dto: ReviewDto) -> Result<Self, Self::Error> {
        let publication_id = dto.publication_id.ok_or_else(|| {
            CatalogError::MalformedInput("a review must name its `publicationId`".to_owned())
        })?;
        Ok(Self {
            reviewer_name: dto.reviewer_name,
            is_positive: dto.is_positive,
            comment: dto.comment,
            publication_id,
        })
    }
}
