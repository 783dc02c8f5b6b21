//! Transfer forms for publications.
use serde::{Deserialize, Serialize};

use crate::db::models::publication::{Draft, Publication, PublicationDetail};

/// Full transfer form of a publication.
///
/// Relations travel as ids only. Omitted id lists read as empty and an omitted
/// `publisherId` as no publisher, so a `PUT` without them clears the relation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDto {
    /// Title of the publication.
    pub title: String,
    /// Free form description.
    pub description: String,
    /// Ids of the authors, in link order.
    #[serde(default)]
    pub authors_ids: Vec<i64>,
    /// Ids of the reviews of this publication.
    #[serde(default)]
    pub reviews_ids: Vec<i64>,
    /// Id of the publisher, `null` when there is none.
    #[serde(default)]
    pub publisher_id: Option<i64>,
}

/// Brief transfer form of a publication, used in lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicationBriefDto {
    /// Store-assigned identifier.
    pub id: i64,
    /// Title of the publication.
    pub title: String,
    /// Free form description.
    pub description: String,
}

impl From<&PublicationDetail> for PublicationDto {
    fn from(detail: &PublicationDetail) -> Self {
        Self {
            title: detail.publication.title.clone(),
            description: detail.publication.description.clone(),
            authors_ids: detail.authors.iter().map(|au| au.id).collect(),
            reviews_ids: detail.reviews.iter().map(|rv| rv.id).collect(),
            publisher_id: detail.publisher.as_ref().map(|pb| pb.id),
        }
    }
}

impl From<&Publication> for PublicationBriefDto {
    fn from(publication: &Publication) -> Self {
        Self {
            id: publication.id,
            title: publication.title.clone(),
            description: publication.description.clone(),
        }
    }
}

impl From<PublicationDto> for Draft {
    fn from(dto: PublicationDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            authors_ids: dto.authors_ids,
            reviews_ids: dto.reviews_ids,
            publisher_id: dto.publisher_id,
        }
    }
}
