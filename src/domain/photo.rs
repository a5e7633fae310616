//! Photo domain model.
//!
//! This module defines the immutable [`Photo`] record returned by the photo API,
//! its resolution variants, and the orientation filter used when listing photos.
//! A photo's [`PhotoId`] is the sole key for favoriting and list rendering: two
//! records with the same id are the same logical photo even when fetched on
//! different pages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a photo.
///
/// Serialized transparently as an integer so the favorites slot stays a plain
/// JSON array of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub u64);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhotoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Pre-rendered resolution variants of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Original,
    Large2x,
    Large,
    Medium,
    Small,
    Portrait,
    Landscape,
    Tiny,
}

impl Variant {
    /// Human-readable label shown in the download sheet.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Large2x => "Large 2x",
            Self::Large => "Large",
            Self::Medium => "Medium",
            Self::Small => "Small",
            Self::Portrait => "Portrait",
            Self::Landscape => "Landscape",
            Self::Tiny => "Tiny",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "original" => Ok(Self::Original),
            "large2x" => Ok(Self::Large2x),
            "large" => Ok(Self::Large),
            "medium" => Ok(Self::Medium),
            "small" => Ok(Self::Small),
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "tiny" => Ok(Self::Tiny),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

/// URLs of every resolution variant, as delivered by the API under `src`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSources {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

impl PhotoSources {
    /// Returns the URL of a variant. Empty when the API omitted it.
    #[must_use]
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Original => &self.original,
            Variant::Large2x => &self.large2x,
            Variant::Large => &self.large,
            Variant::Medium => &self.medium,
            Variant::Small => &self.small,
            Variant::Portrait => &self.portrait,
            Variant::Landscape => &self.landscape,
            Variant::Tiny => &self.tiny,
        }
    }
}

/// A single stock photo.
///
/// # Examples
///
/// ```
/// use lumina::domain::{Photo, PhotoId, PhotoShape};
///
/// let photo: Photo = serde_json::from_str(r#"{
///     "id": 42, "width": 6000, "height": 4000,
///     "photographer": "Ada", "src": { "original": "https://img/42.jpg" }
/// }"#).unwrap();
/// assert_eq!(photo.id, PhotoId(42));
/// assert_eq!(photo.shape(), PhotoShape::Landscape);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub width: u32,
    pub height: u32,

    /// Canonical page URL on the photo site.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub photographer: String,

    #[serde(default)]
    pub photographer_url: String,

    #[serde(default)]
    pub photographer_id: u64,

    /// Average color as a hex string, e.g. `#7E8C8A`.
    #[serde(default)]
    pub avg_color: Option<String>,

    #[serde(default)]
    pub src: PhotoSources,

    /// Alt text; the API sends either a string, an empty string or `null`.
    #[serde(default)]
    pub alt: Option<String>,
}

impl Photo {
    /// Alt text, or an empty string when none was provided.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or_default()
    }

    /// Shape derived from the pixel dimensions.
    #[must_use]
    pub const fn shape(&self) -> PhotoShape {
        if self.width > self.height {
            PhotoShape::Landscape
        } else if self.height > self.width {
            PhotoShape::Portrait
        } else {
            PhotoShape::Square
        }
    }

    /// URL used when sharing: the canonical page, or a constructed one.
    #[must_use]
    pub fn share_url(&self) -> String {
        if self.url.is_empty() {
            format!("https://www.pexels.com/photo/{}/", self.id)
        } else {
            self.url.clone()
        }
    }
}

/// Shape label shown in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoShape {
    Landscape,
    Portrait,
    Square,
}

impl fmt::Display for PhotoShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
            Self::Square => "Square",
        };
        f.write_str(label)
    }
}

/// Orientation filter applied to listing requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    All,
    Landscape,
    Portrait,
}

impl Orientation {
    /// Value of the `orientation` query parameter; `None` for [`Orientation::All`].
    #[must_use]
    pub const fn as_query_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Landscape => Some("landscape"),
            Self::Portrait => Some("portrait"),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_param().unwrap_or("all"))
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_api_record() {
        let json = r##"{
            "id": 2014422,
            "width": 3024,
            "height": 3024,
            "url": "https://www.pexels.com/photo/brown-rocks-2014422/",
            "photographer": "Joey Farina",
            "photographer_url": "https://www.pexels.com/@joey",
            "photographer_id": 680589,
            "avg_color": "#978E82",
            "src": {
                "original": "https://images.pexels.com/photos/2014422/a.jpeg",
                "large2x": "https://images.pexels.com/photos/2014422/b.jpeg",
                "large": "https://images.pexels.com/photos/2014422/c.jpeg",
                "medium": "https://images.pexels.com/photos/2014422/d.jpeg",
                "small": "https://images.pexels.com/photos/2014422/e.jpeg",
                "portrait": "https://images.pexels.com/photos/2014422/f.jpeg",
                "landscape": "https://images.pexels.com/photos/2014422/g.jpeg",
                "tiny": "https://images.pexels.com/photos/2014422/h.jpeg"
            },
            "liked": false,
            "alt": null
        }"##;

        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.id, PhotoId(2_014_422));
        assert_eq!(photo.alt_text(), "");
        assert_eq!(photo.shape(), PhotoShape::Square);
        assert_eq!(photo.src.get(Variant::Large2x), "https://images.pexels.com/photos/2014422/b.jpeg");
    }

    #[test]
    fn share_url_falls_back_to_constructed_page() {
        let photo: Photo = serde_json::from_str(r#"{"id": 7, "width": 1, "height": 2}"#).unwrap();
        assert_eq!(photo.share_url(), "https://www.pexels.com/photo/7/");
        assert_eq!(photo.shape(), PhotoShape::Portrait);
    }

    #[test]
    fn orientation_parses_and_maps_to_query_param() {
        assert_eq!("Portrait".parse::<Orientation>().unwrap(), Orientation::Portrait);
        assert_eq!(Orientation::All.as_query_param(), None);
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn variant_parses_loose_spellings() {
        assert_eq!("large 2x".parse::<Variant>().unwrap(), Variant::Large2x);
        assert_eq!("Large-2x".parse::<Variant>().unwrap(), Variant::Large2x);
        assert_eq!("ORIGINAL".parse::<Variant>().unwrap(), Variant::Original);
    }
}
