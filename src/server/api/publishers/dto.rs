//! Transfer forms for publishers.
use serde::{Deserialize, Serialize};

use crate::db::models::publisher::{Draft, Publisher, PublisherDetail};

/// Full transfer form of a publisher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublisherDto {
    /// Name of the publishing house.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Ids of the publications it owns.
    #[serde(default)]
    pub publications_ids: Vec<i64>,
}

/// Brief transfer form of a publisher, used in lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublisherBriefDto {
    /// Store-assigned identifier.
    pub id: i64,
    /// Name of the publishing house.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl From<&PublisherDetail> for PublisherDto {
    fn from(detail: &PublisherDetail) -> Self {
        Self {
            name: detail.publisher.name.clone(),
            email: detail.publisher.email.clone(),
            publications_ids: detail.publications.iter().map(|pb| pb.id).collect(),
        }
    }
}

impl From<&Publisher> for PublisherBriefDto {
    fn from(publisher: &Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name.clone(),
            email: publisher.email.clone(),
        }
    }
}

impl From<PublisherDto> for Draft {
    fn from(dto: PublisherDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            publications_ids: dto.publications_ids,
        }
    }
}
