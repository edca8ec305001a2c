use serde::Deserialize;

/// One day's image record, decoded verbatim from the archive response.
/// The date fields are kept in the service's native string format and
/// never parsed. Fields missing from the response decode to their
/// defaults, matching how the service omits keys for some markets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageDescriptor {
    #[serde(rename = "startdate")]
    pub start_date: String,
    #[serde(rename = "fullstartdate")]
    pub full_start_date: String,
    #[serde(rename = "enddate")]
    pub end_date: String,
    /// Relative path to the image resource, not a full URL
    pub url: String,
    /// Partial URL usable to construct other resolutions of the same image
    #[serde(rename = "urlbase")]
    pub url_base: String,
    pub copyright: String,
    #[serde(rename = "copyrightlink")]
    pub copyright_link: String,
    pub quiz: String,
    #[serde(rename = "wp")]
    pub wallpaper_of_the_day: bool,
    #[serde(rename = "hsh")]
    pub hash: String,
}

/// Uninterpreted image bytes; ownership moves to the caller.
pub type RawImage = Vec<u8>;

/// The service wraps every answer in a list even though we only
/// ever ask for a single record.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageArchiveResponse {
    pub images: Vec<ImageDescriptor>,
}
