use crate::content::{GalleryItem, Project};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("cannot open project `{project}`: its gallery is empty")]
    EmptyGallery { project: String },
    #[error("slide index {index} is out of range for a gallery of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("the gallery is closed")]
    Closed,
}

pub trait ScrollLock {
    fn acquire(&mut self);
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Close,
    Next,
    Previous,
}

impl NavIntent {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlideAction {
    Close,
    Next,
    Previous,
    JumpTo(usize),
    JumpToLabel(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlideView<'a> {
    pub project_id: &'a str,
    pub slide: &'a GalleryItem,
    pub index: usize,
    pub len: usize,
}

impl SlideView<'_> {
    /// Dots and thumbnails render for any slide count; arrows need two slides.
    pub fn shows_arrows(&self) -> bool {
        self.len > 1
    }
}

#[derive(Debug)]
struct Session {
    project_id: String,
    slides: Vec<GalleryItem>,
    active: usize,
}

#[derive(Debug)]
pub struct GalleryNavigator<L: ScrollLock> {
    lock: L,
    session: Option<Session>,
}

impl<L: ScrollLock> GalleryNavigator<L> {
    pub fn new(lock: L) -> Self {
        Self {
            lock,
            session: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens on `project` at its first slide. Reopening while already open
    /// replaces the working set and keeps the single lock already held.
    pub fn open(&mut self, project: &Project) -> Result<(), GalleryError> {
        if project.gallery.is_empty() {
            return Err(GalleryError::EmptyGallery {
                project: project.id.clone(),
            });
        }

        if self.session.is_none() {
            self.lock.acquire();
        }
        self.session = Some(Session {
            project_id: project.id.clone(),
            slides: project.gallery.clone(),
            active: 0,
        });
        Ok(())
    }

    pub fn close(&mut self) {
        if self.session.take().is_some() {
            self.lock.release();
        }
    }

    pub fn next(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.active = (session.active + 1) % session.slides.len();
        }
    }

    pub fn previous(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let len = session.slides.len();
            session.active = (session.active + len - 1) % len;
        }
    }

    /// Out-of-range indices are rejected and leave the active slide as it was.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
        let session = self.session.as_mut().ok_or(GalleryError::Closed)?;
        let len = session.slides.len();
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        session.active = index;
        Ok(())
    }

    /// Jumps to the first slide labelled `label`. Returns the new index, or
    /// `None` (with no state change) when no slide matches.
    pub fn jump_to_label(&mut self, label: &str) -> Option<usize> {
        let session = self.session.as_mut()?;
        let index = session.slides.iter().position(|slide| slide.label == label)?;
        session.active = index;
        Some(index)
    }

    pub fn apply(&mut self, intent: NavIntent) -> bool {
        if !self.is_open() {
            return false;
        }
        match intent {
            NavIntent::Close => self.close(),
            NavIntent::Next => self.next(),
            NavIntent::Previous => self.previous(),
        }
        true
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        NavIntent::from_key(key).is_some_and(|intent| self.apply(intent))
    }

    /// A label with no matching slide is a no-op, not an error.
    pub fn dispatch(&mut self, action: &SlideAction) -> Result<(), GalleryError> {
        match action {
            SlideAction::Close => self.close(),
            SlideAction::Next => self.next(),
            SlideAction::Previous => self.previous(),
            SlideAction::JumpTo(index) => return self.jump_to(*index),
            SlideAction::JumpToLabel(label) => {
                self.jump_to_label(label);
            }
        }
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.active)
    }

    pub fn len(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.slides.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slides(&self) -> &[GalleryItem] {
        self.session
            .as_ref()
            .map(|session| session.slides.as_slice())
            .unwrap_or_default()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.project_id.as_str())
    }

    pub fn view(&self) -> Option<SlideView<'_>> {
        let session = self.session.as_ref()?;
        Some(SlideView {
            project_id: &session.project_id,
            slide: &session.slides[session.active],
            index: session.active,
            len: session.slides.len(),
        })
    }
}

impl<L: ScrollLock> Drop for GalleryNavigator<L> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::project_with_labels;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingLock {
        acquired: Rc<Cell<u32>>,
        released: Rc<Cell<u32>>,
    }

    impl CountingLock {
        fn held(&self) -> bool {
            self.acquired.get() > self.released.get()
        }
    }

    impl ScrollLock for CountingLock {
        fn acquire(&mut self) {
            self.acquired.set(self.acquired.get() + 1);
        }

        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn open_on(labels: &[&str]) -> (GalleryNavigator<CountingLock>, CountingLock) {
        let lock = CountingLock::default();
        let mut navigator = GalleryNavigator::new(lock.clone());
        navigator
            .open(&project_with_labels("demo", labels))
            .expect("non-empty gallery opens");
        (navigator, lock)
    }

    fn active_label(navigator: &GalleryNavigator<CountingLock>) -> String {
        navigator
            .view()
            .map(|view| view.slide.label.clone())
            .expect("navigator is open")
    }

    #[test]
    fn next_wraps_around_three_slides() {
        let (mut navigator, _lock) = open_on(&["A", "B", "C"]);
        assert_eq!(navigator.active_index(), Some(0));

        navigator.next();
        assert_eq!(active_label(&navigator), "B");
        navigator.next();
        assert_eq!(active_label(&navigator), "C");
        navigator.next();
        assert_eq!(navigator.active_index(), Some(0));
        assert_eq!(active_label(&navigator), "A");
    }

    #[test]
    fn single_slide_stays_put() {
        let (mut navigator, _lock) = open_on(&["A"]);

        navigator.next();
        assert_eq!(navigator.active_index(), Some(0));
        navigator.previous();
        assert_eq!(navigator.active_index(), Some(0));
    }

    #[test]
    fn previous_from_first_slide_wraps_to_last() {
        let (mut navigator, _lock) = open_on(&["A", "B", "C", "D"]);

        navigator.previous();
        assert_eq!(navigator.active_index(), Some(3));
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        for len in 1..=6 {
            let labels = ["A", "B", "C", "D", "E", "F"];
            let (mut navigator, _lock) = open_on(&labels[..len]);

            for step in 0..50usize {
                if step % 3 == 0 {
                    navigator.previous();
                } else {
                    navigator.next();
                }
                let index = navigator.active_index().expect("still open");
                assert!(index < len, "index {index} escaped gallery of {len}");
            }
        }
    }

    #[test]
    fn n_nexts_return_to_start_and_previous_inverts_next() {
        for len in 1..=5 {
            let labels = ["A", "B", "C", "D", "E"];
            let (mut navigator, _lock) = open_on(&labels[..len]);

            for start in 0..len {
                navigator.jump_to(start).expect("valid index");

                for _ in 0..len {
                    navigator.next();
                }
                assert_eq!(navigator.active_index(), Some(start));

                navigator.next();
                navigator.previous();
                assert_eq!(navigator.active_index(), Some(start));

                navigator.previous();
                navigator.next();
                assert_eq!(navigator.active_index(), Some(start));
            }
        }
    }

    #[test]
    fn reopening_resets_to_first_slide() {
        let (mut navigator, _lock) = open_on(&["A", "B", "C"]);
        navigator.jump_to(2).expect("valid index");
        navigator.close();

        navigator
            .open(&project_with_labels("demo", &["A", "B", "C"]))
            .expect("opens again");
        assert_eq!(navigator.active_index(), Some(0));
    }

    #[test]
    fn open_while_open_replaces_gallery_without_second_lock() {
        let (mut navigator, lock) = open_on(&["A", "B"]);
        navigator.next();

        navigator
            .open(&project_with_labels("other", &["X", "Y", "Z"]))
            .expect("opens");

        assert_eq!(navigator.project_id(), Some("other"));
        assert_eq!(navigator.active_index(), Some(0));
        assert_eq!(navigator.len(), 3);
        assert_eq!(lock.acquired.get(), 1);
    }

    #[test]
    fn close_is_idempotent_and_releases_once() {
        let (mut navigator, lock) = open_on(&["A", "B"]);
        assert!(lock.held());

        navigator.close();
        navigator.close();

        assert!(!navigator.is_open());
        assert_eq!(navigator.active_index(), None);
        assert_eq!(lock.acquired.get(), 1);
        assert_eq!(lock.released.get(), 1);
    }

    #[test]
    fn dropping_an_open_navigator_releases_the_lock() {
        let (navigator, lock) = open_on(&["A"]);
        assert!(lock.held());

        drop(navigator);
        assert!(!lock.held());
        assert_eq!(lock.released.get(), 1);
    }

    #[test]
    fn dropping_a_closed_navigator_does_not_double_release() {
        let (mut navigator, lock) = open_on(&["A"]);
        navigator.close();

        drop(navigator);
        assert_eq!(lock.released.get(), 1);
    }

    #[test]
    fn empty_gallery_is_rejected_and_stays_closed() {
        let lock = CountingLock::default();
        let mut navigator = GalleryNavigator::new(lock.clone());

        let result = navigator.open(&project_with_labels("blank", &[]));

        assert_eq!(
            result,
            Err(GalleryError::EmptyGallery {
                project: "blank".to_string()
            })
        );
        assert!(!navigator.is_open());
        assert_eq!(lock.acquired.get(), 0);
    }

    #[test]
    fn out_of_range_jump_is_rejected_without_moving() {
        let (mut navigator, _lock) = open_on(&["A", "B", "C"]);
        navigator.next();

        let result = navigator.jump_to(3);

        assert_eq!(result, Err(GalleryError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(navigator.active_index(), Some(1));
    }

    #[test]
    fn jump_while_closed_reports_closed() {
        let mut navigator = GalleryNavigator::new(CountingLock::default());
        assert_eq!(navigator.jump_to(0), Err(GalleryError::Closed));
    }

    #[test]
    fn jump_to_label_moves_to_match_and_ignores_unknown() {
        let (mut navigator, _lock) = open_on(&["A", "B", "C"]);

        assert_eq!(navigator.jump_to_label("C"), Some(2));
        assert_eq!(navigator.active_index(), Some(2));

        assert_eq!(navigator.jump_to_label("Z"), None);
        assert_eq!(navigator.active_index(), Some(2));
    }

    #[test]
    fn jump_to_label_picks_first_duplicate() {
        let (mut navigator, _lock) = open_on(&["A", "B", "A"]);
        navigator.next();

        assert_eq!(navigator.jump_to_label("A"), Some(0));
    }

    #[test]
    fn keys_drive_navigation_only_while_open() {
        let (mut navigator, lock) = open_on(&["A", "B", "C"]);

        assert!(navigator.handle_key("ArrowRight"));
        assert_eq!(navigator.active_index(), Some(1));
        assert!(navigator.handle_key("ArrowLeft"));
        assert!(navigator.handle_key("ArrowLeft"));
        assert_eq!(navigator.active_index(), Some(2));
        assert!(!navigator.handle_key("Enter"));

        assert!(navigator.handle_key("Escape"));
        assert!(!navigator.is_open());
        assert_eq!(lock.released.get(), 1);

        assert!(!navigator.handle_key("ArrowRight"));
        assert!(!navigator.handle_key("Escape"));
        assert_eq!(lock.released.get(), 1);
    }

    #[test]
    fn view_exposes_slide_position_and_count() {
        let (mut navigator, _lock) = open_on(&["A", "B"]);
        navigator.next();

        let view = navigator.view().expect("open");
        assert_eq!(view.project_id, "demo");
        assert_eq!(view.index, 1);
        assert_eq!(view.len, 2);
        assert_eq!(view.slide.image, "/img/B.webp");
    }

    #[test]
    fn closed_navigator_exposes_nothing() {
        let navigator = GalleryNavigator::new(CountingLock::default());

        assert!(navigator.view().is_none());
        assert!(navigator.slides().is_empty());
        assert!(navigator.is_empty());
        assert_eq!(navigator.project_id(), None);
    }

    #[test]
    fn dispatching_an_unknown_label_succeeds_without_moving() {
        let (mut navigator, _lock) = open_on(&["A", "B", "C"]);
        navigator.next();

        assert_eq!(
            navigator.dispatch(&SlideAction::JumpToLabel("Z".to_string())),
            Ok(())
        );
        assert_eq!(navigator.active_index(), Some(1));

        assert_eq!(
            navigator.dispatch(&SlideAction::JumpToLabel("C".to_string())),
            Ok(())
        );
        assert_eq!(navigator.active_index(), Some(2));
    }

    #[test]
    fn dispatch_rejects_out_of_range_jump_and_closes_once() {
        let (mut navigator, lock) = open_on(&["A", "B"]);

        assert_eq!(
            navigator.dispatch(&SlideAction::JumpTo(5)),
            Err(GalleryError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(navigator.active_index(), Some(0));

        navigator.dispatch(&SlideAction::Previous).expect("previous always succeeds");
        assert_eq!(navigator.active_index(), Some(1));

        navigator.dispatch(&SlideAction::Close).expect("close always succeeds");
        navigator.dispatch(&SlideAction::Close).expect("close is idempotent");
        assert!(!navigator.is_open());
        assert_eq!(lock.released.get(), 1);
        assert!(!lock.held());
    }

    #[test]
    fn single_slide_view_hides_arrows_but_keeps_its_indicator() {
        let (navigator, _lock) = open_on(&["A"]);

        let view = navigator.view().expect("open");
        assert!(!view.shows_arrows());
        assert_eq!(view.len, 1);
        assert_eq!(navigator.slides().len(), 1);

        let (navigator, _lock) = open_on(&["A", "B"]);
        assert!(navigator.view().expect("open").shows_arrows());
    }
}
