use serde::Deserialize;

/// Envelope from `GET /books/v1/volumes`. `items` is absent entirely when
/// the catalog finds nothing, so it must not be required.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    pub total_items: Option<u64>,
    pub items: Option<Vec<Volume>>,
}

/// One catalog entry. The provider owns this shape; everything beyond `id`
/// lives under `volumeInfo` and every field of it is optional on the wire.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Volume {
    pub id: Option<String>,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
    pub image_links: Option<ImageLinks>,
    pub info_link: Option<String>,
    pub language: Option<String>,
}

/// ISBN-10/ISBN-13 pair as the provider reports it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub identifier: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}
