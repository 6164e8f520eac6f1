use rfd::FileDialog;

use crate::state::gallery::ImageRef;

/// Image acquisition boundary
///
/// Wraps the native file dialogs. Both flows block the calling flow until
/// the user confirms or dismisses the dialog; dismissal is reported as a
/// distinct [`PickOutcome::Cancelled`] signal rather than an error and must
/// be treated as a no-op by the caller.

/// Outcome of a picker dialog.
#[derive(Debug, Clone)]
pub enum PickOutcome {
    /// The user dismissed the dialog. Not an error; nothing changes.
    Cancelled,
    /// One or more images were picked, in selection order.
    Picked(Vec<ImageRef>),
}

/// Extensions the dialogs offer (common raster formats iced can decode).
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Let the user pick a single image.
pub fn pick_single() -> PickOutcome {
    let picked = FileDialog::new()
        .set_title("Choose a profile image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file();

    match picked {
        Some(path) => PickOutcome::Picked(vec![ImageRef::new(path)]),
        None => PickOutcome::Cancelled,
    }
}

/// Let the user pick several images at once.
pub fn pick_many() -> PickOutcome {
    let picked = FileDialog::new()
        .set_title("Choose profile images")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_files();

    match picked {
        Some(paths) if !paths.is_empty() => {
            PickOutcome::Picked(paths.into_iter().map(ImageRef::new).collect())
        }
        _ => PickOutcome::Cancelled,
    }
}
