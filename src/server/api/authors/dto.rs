//! Transfer forms for authors.
use serde::{Deserialize, Serialize};

use crate::db::models::author::{Author, Draft};

/// Full transfer form of an author, used for input and for single author responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    /// Full name of the author.
    pub name: String,
    /// Short biography.
    pub biography: String,
}

/// Brief transfer form of an author, used in lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBriefDto {
    /// Store-assigned identifier.
    pub id: i64,
    /// Full name of the author.
    pub name: String,
    /// Short biography.
    pub biography: String,
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            biography: author.biography.clone(),
        }
    }
}

impl From<&Author> for AuthorBriefDto {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            biography: author.biography.clone(),
        }
    }
}

impl From<AuthorDto> for Draft {
    fn from(dto: AuthorDto) -> Self {
        Self {
            name: dto.name,
            biography: dto.biography,
        }
    }
}
