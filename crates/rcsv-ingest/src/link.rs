//! Share-link resolution.
//!
//! A share link references a hosted file through a viewer page and is not
//! directly fetchable as raw bytes. The file id sits between the `/d/`
//! segment and the following `/view` suffix; the direct-download form embeds
//! that id in a fixed template.

use crate::error::LinkError;

const FILE_SEGMENT_MARKER: &str = "/d/";
const VIEW_SUFFIX_MARKER: &str = "/view";

/// Template the hosting service serves raw file bytes from.
const DIRECT_DOWNLOAD_PREFIX: &str = "https://drive.google.com/uc?id=";

/// Extracts the file id from a share link.
///
/// The id is the substring between the first `/d/` and the first `/view`
/// that follows it. Missing markers and an empty id fail closed.
pub fn extract_file_id(share_url: &str) -> std::result::Result<&str, LinkError> {
    let start = share_url
        .find(FILE_SEGMENT_MARKER)
        .ok_or_else(|| LinkError::MissingFileSegment {
            url: share_url.to_string(),
        })?
        + FILE_SEGMENT_MARKER.len();
    let rest = &share_url[start..];
    let end = rest
        .find(VIEW_SUFFIX_MARKER)
        .ok_or_else(|| LinkError::MissingViewSuffix {
            url: share_url.to_string(),
        })?;
    let id = &rest[..end];
    if id.is_empty() {
        return Err(LinkError::EmptyFileId {
            url: share_url.to_string(),
        });
    }
    Ok(id)
}

/// Derives the direct-download link for a share link.
pub fn resolve_direct_link(share_url: &str) -> std::result::Result<String, LinkError> {
    let id = extract_file_id(share_url)?;
    Ok(format!("{DIRECT_DOWNLOAD_PREFIX}{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolves_well_formed_share_link() {
        let share = "https://drive.google.com/file/d/1FM4f9e_abc/view?usp=sharing";
        assert_eq!(extract_file_id(share).unwrap(), "1FM4f9e_abc");
        assert_eq!(
            resolve_direct_link(share).unwrap(),
            "https://drive.google.com/uc?id=1FM4f9e_abc"
        );
    }

    #[test]
    fn missing_file_segment_fails_closed() {
        let err = resolve_direct_link("https://drive.google.com/file/abc/view").unwrap_err();
        assert!(matches!(err, LinkError::MissingFileSegment { .. }));
    }

    #[test]
    fn missing_view_suffix_fails_closed() {
        let err = resolve_direct_link("https://drive.google.com/file/d/abc").unwrap_err();
        assert!(matches!(err, LinkError::MissingViewSuffix { .. }));
    }

    #[test]
    fn view_before_file_segment_fails_closed() {
        // The suffix must come after the id, not anywhere in the string.
        let err = resolve_direct_link("https://drive.google.com/view/d/abc").unwrap_err();
        assert!(matches!(err, LinkError::MissingViewSuffix { .. }));
    }

    #[test]
    fn empty_file_id_fails_closed() {
        let err = resolve_direct_link("https://drive.google.com/file/d//view").unwrap_err();
        assert!(matches!(err, LinkError::EmptyFileId { .. }));
    }

    proptest! {
        #[test]
        fn resolves_any_identifier(id in "[A-Za-z0-9_-]{1,64}") {
            let share = format!("https://drive.google.com/file/d/{id}/view?usp=sharing");
            prop_assert_eq!(extract_file_id(&share).unwrap(), id.as_str());
            prop_assert_eq!(
                resolve_direct_link(&share).unwrap(),
                format!("https://drive.google.com/uc?id={id}")
            );
        }
    }
}
