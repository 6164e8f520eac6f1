/// The acquired image collection and its current selection
///
/// The gallery owns every image the user has picked so far, in insertion
/// order, together with the index of the one currently shown in the
/// previews. It is the only owner of `ImageRef` values; removing an entry
/// simply drops the handle.

use std::path::{Path, PathBuf};

/// Opaque handle to a locally acquired image.
///
/// Wraps the path returned by the picker dialog. The gallery never opens
/// the file itself; the UI layer turns the path into a widget handle when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: PathBuf) -> Self {
        ImageRef(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ImageRef {
    fn from(path: PathBuf) -> Self {
        ImageRef(path)
    }
}

/// Ordered collection of acquired images plus the selected index.
///
/// Invariant: whenever the collection is non-empty, `selected` is a valid
/// index into it. When the collection is empty, `selected` is 0 and unused.
/// Duplicates are permitted.
#[derive(Debug, Default)]
pub struct Gallery {
    images: Vec<ImageRef>,
    selected: usize,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single image and select it.
    pub fn add(&mut self, image: ImageRef) {
        self.images.push(image);
        self.selected = self.images.len() - 1;
    }

    /// Append a batch of images in input order and select the first of them.
    ///
    /// An empty batch leaves the gallery untouched.
    pub fn add_many(&mut self, images: Vec<ImageRef>) {
        if images.is_empty() {
            return;
        }
        let first_new = self.images.len();
        self.images.extend(images);
        self.selected = first_new;
    }

    /// Remove the image at `index`, shifting later entries down.
    ///
    /// Out-of-bounds indices are ignored. The selection is only clamped when
    /// it falls off the end of the shortened collection; removing an entry
    /// before the selected one does not renumber the selection downward.
    /// That matches the historical behavior of this screen and is covered by
    /// tests below.
    pub fn remove(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.images.remove(index);
        if self.images.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.images.len() {
            self.selected = self.images.len() - 1;
        }
    }

    /// Set the selection directly. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.selected = index;
        }
    }

    /// The currently selected image, if any.
    pub fn selected_image(&self) -> Option<&ImageRef> {
        self.images.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(name: &str) -> ImageRef {
        ImageRef::new(PathBuf::from(name))
    }

    #[test]
    fn add_to_empty_selects_first() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));

        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_index(), 0);
        assert_eq!(gallery.selected_image(), Some(&img("a.png")));
    }

    #[test]
    fn add_selects_newest() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));
        gallery.add(img("b.png"));

        assert_eq!(gallery.selected_index(), 1);
        assert_eq!(gallery.selected_image(), Some(&img("b.png")));
    }

    #[test]
    fn add_many_selects_first_of_batch() {
        let mut gallery = Gallery::new();
        gallery.add_many(vec![img("x.png"), img("y.png")]);

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.selected_index(), 0);

        gallery.add_many(vec![img("z.png"), img("w.png")]);
        assert_eq!(gallery.len(), 4);
        assert_eq!(gallery.selected_index(), 2);
    }

    #[test]
    fn add_many_empty_batch_is_noop() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));
        gallery.add_many(Vec::new());

        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));
        gallery.add(img("a.png"));

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.selected_index(), 1);
    }

    #[test]
    fn remove_clamps_selection_to_new_end() {
        // [a, b] with b selected; removing index 0 leaves [b] and the
        // selection clamps to 0.
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));
        gallery.add(img("b.png"));
        assert_eq!(gallery.selected_index(), 1);

        gallery.remove(0);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_index(), 0);
        assert_eq!(gallery.selected_image(), Some(&img("b.png")));
    }

    #[test]
    fn remove_before_selection_does_not_renumber() {
        // [a, b, c, d] with c selected (index 2); removing a keeps the
        // numeric selection at 2, which now points at d. The selection does
        // not follow the logical image.
        let mut gallery = Gallery::new();
        gallery.add_many(vec![img("a"), img("b"), img("c"), img("d")]);
        gallery.select(2);

        gallery.remove(0);
        assert_eq!(gallery.selected_index(), 2);
        assert_eq!(gallery.selected_image(), Some(&img("d")));
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));

        gallery.remove(5);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn remove_last_image_drains_to_empty() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));

        gallery.remove(0);
        assert!(gallery.is_empty());
        assert_eq!(gallery.selected_index(), 0);
        assert_eq!(gallery.selected_image(), None);
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));
        gallery.add(img("b.png"));

        gallery.select(7);
        assert_eq!(gallery.selected_index(), 1);

        gallery.select(0);
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn selection_stays_in_bounds_under_mixed_mutations() {
        let mut gallery = Gallery::new();
        let ops: &[&dyn Fn(&mut Gallery)] = &[
            &|g| g.add(img("a")),
            &|g| g.add_many(vec![img("b"), img("c")]),
            &|g| g.remove(1),
            &|g| g.select(1),
            &|g| g.remove(0),
            &|g| g.remove(0),
            &|g| g.remove(0),
            &|g| g.add(img("d")),
            &|g| g.select(3),
        ];

        for op in ops {
            op(&mut gallery);
            if !gallery.is_empty() {
                assert!(gallery.selected_index() < gallery.len());
            }
        }
    }

    #[test]
    fn insertion_order_is_preserved_modulo_removals() {
        let mut gallery = Gallery::new();
        gallery.add_many(vec![img("a"), img("b"), img("c")]);
        gallery.remove(1);

        let order: Vec<_> = gallery.iter().cloned().collect();
        assert_eq!(order, vec![img("a"), img("c")]);
    }
}
