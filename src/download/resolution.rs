//! Resolution recommendation for the download sheet.
//!
//! Given a photo and the screen it will be used on, lists the downloadable
//! variants from largest to smallest and marks the one that best fits the
//! screen. Pure and deterministic; no I/O.

use crate::domain::{Photo, ScreenInfo, Variant};

/// One downloadable resolution of a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOption {
    pub variant: Variant,
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Rough file size shown next to the option, e.g. `~500 KB`.
    pub file_size: &'static str,
    pub recommended: bool,
}

impl ResolutionOption {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.variant.label()
    }

    /// Dimensions formatted as `WIDTHxHEIGHT`.
    #[must_use]
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    fn covers(&self, (width, height): (u32, u32)) -> bool {
        self.width >= width && self.height >= height
    }
}

/// Offered tiers below the original, with their nominal dimensions.
const SCALED_TIERS: [(Variant, u32, u32, &str); 3] = [
    (Variant::Large2x, 1920, 1280, "~1-3 MB"),
    (Variant::Large, 1024, 683, "~500 KB"),
    (Variant::Medium, 640, 427, "~200 KB"),
];

/// Builds the ranked option list for `photo` on `screen`.
///
/// Variants with an empty URL are skipped. Nominal tier dimensions are capped
/// at the photo's own dimensions. The first option covering the screen's
/// physical pixels is recommended; when none does, the smallest one is.
///
/// # Examples
///
/// ```
/// use lumina::domain::{Photo, ScreenInfo, Variant};
/// use lumina::download::resolution_options;
///
/// let photo: Photo = serde_json::from_str(r#"{
///     "id": 1, "width": 6000, "height": 4000,
///     "src": { "original": "o", "large2x": "l2", "large": "l", "medium": "m" }
/// }"#).unwrap();
///
/// let options = resolution_options(&photo, &ScreenInfo::new(1280, 800, 1.0));
/// let recommended: Vec<_> = options.iter().filter(|o| o.recommended).collect();
/// assert_eq!(recommended.len(), 1);
/// assert_eq!(recommended[0].variant, Variant::Original);
/// ```
#[must_use]
pub fn resolution_options(photo: &Photo, screen: &ScreenInfo) -> Vec<ResolutionOption> {
    let mut options = Vec::with_capacity(1 + SCALED_TIERS.len());

    if !photo.src.original.is_empty() {
        options.push(ResolutionOption {
            variant: Variant::Original,
            url: photo.src.original.clone(),
            width: photo.width,
            height: photo.height,
            file_size: "~2-5 MB",
            recommended: false,
        });
    }

    for (variant, width, height, file_size) in SCALED_TIERS {
        let url = photo.src.get(variant);
        if url.is_empty() {
            continue;
        }
        options.push(ResolutionOption {
            variant,
            url: url.to_string(),
            width: width.min(photo.width),
            height: height.min(photo.height),
            file_size,
            recommended: false,
        });
    }

    let target = screen.physical_pixels();
    let pick = options
        .iter()
        .position(|option| option.covers(target))
        .or_else(|| options.len().checked_sub(1));

    if let Some(index) = pick {
        options[index].recommended = true;
    }

    tracing::trace!(
        photo_id = %photo.id,
        screen_width = target.0,
        screen_height = target.1,
        options = options.len(),
        recommended = ?pick.map(|i| options[i].variant),
        "computed resolution options"
    );

    options
}

/// The recommended option, or the first one if none is marked.
#[must_use]
pub fn recommended_option(options: &[ResolutionOption]) -> Option<&ResolutionOption> {
    options
        .iter()
        .find(|option| option.recommended)
        .or_else(|| options.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PhotoId, PhotoSources};

    fn photo(width: u32, height: u32, src: PhotoSources) -> Photo {
        Photo {
            id: PhotoId(7),
            width,
            height,
            url: String::new(),
            photographer: "Ada".into(),
            photographer_url: String::new(),
            photographer_id: 1,
            avg_color: None,
            src,
            alt: None,
        }
    }

    fn full_sources() -> PhotoSources {
        PhotoSources {
            original: "https://img/o.jpg".into(),
            large2x: "https://img/l2.jpg".into(),
            large: "https://img/l.jpg".into(),
            medium: "https://img/m.jpg".into(),
            small: "https://img/s.jpg".into(),
            ..PhotoSources::default()
        }
    }

    fn recommended(options: &[ResolutionOption]) -> Vec<Variant> {
        options.iter().filter(|o| o.recommended).map(|o| o.variant).collect()
    }

    #[test]
    fn lists_offered_tiers_largest_first() {
        let options = resolution_options(&photo(6000, 4000, full_sources()), &ScreenInfo::default());
        let variants: Vec<_> = options.iter().map(|o| o.variant).collect();
        assert_eq!(
            variants,
            [Variant::Original, Variant::Large2x, Variant::Large, Variant::Medium]
        );
        assert_eq!(options[0].size(), "6000x4000");
        assert_eq!(options[2].size(), "1024x683");
        assert_eq!(options[3].file_size, "~200 KB");
    }

    #[test]
    fn large_original_is_recommended_for_retina_screen() {
        let screen = ScreenInfo::new(1440, 900, 2.0);
        let options = resolution_options(&photo(6000, 4000, full_sources()), &screen);
        assert_eq!(recommended(&options), [Variant::Original]);
    }

    #[test]
    fn first_covering_tier_wins_without_original() {
        let src = PhotoSources {
            original: String::new(),
            large2x: String::new(),
            ..full_sources()
        };
        let screen = ScreenInfo::new(1000, 600, 1.0);
        let options = resolution_options(&photo(6000, 4000, src), &screen);
        assert_eq!(recommended(&options), [Variant::Large]);
    }

    #[test]
    fn tier_dimensions_never_exceed_photo() {
        let options = resolution_options(&photo(1200, 500, full_sources()), &ScreenInfo::default());
        assert_eq!(options[1].size(), "1200x500");
        assert_eq!(options[2].size(), "1024x500");
        assert_eq!(recommended(&options), [Variant::Medium]);
    }

    #[test]
    fn falls_back_to_smallest_when_nothing_covers_screen() {
        let screen = ScreenInfo::new(3840, 2160, 2.0);
        let options = resolution_options(&photo(3000, 2000, full_sources()), &screen);
        assert_eq!(recommended(&options), [Variant::Medium]);
    }

    #[test]
    fn missing_variants_are_omitted() {
        let src = PhotoSources {
            original: "https://img/o.jpg".into(),
            medium: "https://img/m.jpg".into(),
            ..PhotoSources::default()
        };
        let options = resolution_options(&photo(800, 600, src), &ScreenInfo::default());
        let variants: Vec<_> = options.iter().map(|o| o.variant).collect();
        assert_eq!(variants, [Variant::Original, Variant::Medium]);
        assert_eq!(recommended(&options), [Variant::Medium]);
    }

    #[test]
    fn no_sources_means_no_options() {
        let options = resolution_options(&photo(800, 600, PhotoSources::default()), &ScreenInfo::default());
        assert!(options.is_empty());
        assert!(recommended_option(&options).is_none());
    }

    #[test]
    fn recommended_option_prefers_marked_entry() {
        let screen = ScreenInfo::new(3840, 2160, 1.0);
        let options = resolution_options(&photo(3000, 2000, full_sources()), &screen);
        assert_eq!(recommended_option(&options).map(|o| o.variant), Some(Variant::Medium));
    }
}
