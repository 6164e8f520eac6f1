use iced::font::Weight;
use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar, Viewport};
use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Row};
use iced::{Alignment, Color, Element, Font, Length, Size, Task, Theme};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod acquire;
mod error;
mod prefs;
mod preview;
mod state;
mod ui;

use acquire::PickOutcome;
use error::PrefsError;
use state::gallery::Gallery;
use state::pager::{PagerSync, PAGE_COUNT, PAGE_WIDTH};
use state::profile::{Profile, StoredProfile};

/// Main application state
struct IconChecker {
    /// Every image picked so far, plus the selected one
    gallery: Gallery,
    /// Active preview page, kept in sync with the pager
    pager: PagerSync,
    /// The two profile text fields shown in the previews
    profile: Profile,
    /// Where the preference database lives; `None` when no data directory
    /// could be resolved (prefs are then skipped, never fatal)
    prefs_path: Option<PathBuf>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User asked to pick a single image
    PickImage,
    /// User asked to pick several images at once
    PickImages,
    /// A thumbnail was tapped
    ImageSelected(usize),
    /// A thumbnail's remove control was tapped
    ImageRemoved(usize),
    /// A tab label was tapped
    TabPressed(usize),
    /// The preview pager reported a new scroll offset
    PreviewScrolled(f32),
    /// The display name field was edited
    DisplayNameChanged(String),
    /// The handle field was edited
    HandleChanged(String),
    /// Startup load of the stored profile completed
    ProfileLoaded(StoredProfile),
    /// A background preference write completed
    PrefStored(Result<(), PrefsError>),
}

fn pager_id() -> scrollable::Id {
    scrollable::Id::new("preview-pager")
}

impl IconChecker {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let prefs_path = match prefs::default_path() {
            Ok(path) => {
                info!(path = %path.display(), "preference store");
                Some(path)
            }
            Err(err) => {
                warn!(error = %err, "preferences disabled");
                None
            }
        };

        // Load the stored profile fields in the background; absent values
        // (or a failed read) keep the defaults.
        let load = match &prefs_path {
            Some(path) => Task::perform(prefs::load_profile(path.clone()), Message::ProfileLoaded),
            None => Task::none(),
        };

        (
            IconChecker {
                gallery: Gallery::new(),
                pager: PagerSync::new(),
                profile: Profile::new(),
                prefs_path,
                status: String::from("Pick an image to get started."),
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // The dialog blocks until the user confirms or dismisses it.
                if let Some(status) = apply_pick(&mut self.gallery, acquire::pick_single()) {
                    self.status = status;
                }
                Task::none()
            }
            Message::PickImages => {
                if let Some(status) = apply_pick(&mut self.gallery, acquire::pick_many()) {
                    self.status = status;
                }
                Task::none()
            }
            Message::ImageSelected(index) => {
                self.gallery.select(index);
                Task::none()
            }
            Message::ImageRemoved(index) => {
                self.gallery.remove(index);
                if self.gallery.is_empty() {
                    self.status = String::from("Pick an image to get started.");
                }
                Task::none()
            }
            Message::TabPressed(index) => match self.pager.tab_pressed(index) {
                Some(offset_x) => scrollable::scroll_to(
                    pager_id(),
                    AbsoluteOffset {
                        x: offset_x,
                        y: 0.0,
                    },
                ),
                None => Task::none(),
            },
            Message::PreviewScrolled(offset_x) => {
                self.pager.scrolled(offset_x);
                Task::none()
            }
            Message::DisplayNameChanged(value) => {
                // Optimistic: the in-memory value updates immediately, the
                // write happens in the background.
                self.profile.set_display_name(value.clone());
                self.store(prefs::KEY_DISPLAY_NAME, value)
            }
            Message::HandleChanged(value) => {
                self.profile.set_handle(value.clone());
                self.store(prefs::KEY_USERNAME, value)
            }
            Message::ProfileLoaded(stored) => {
                self.profile.apply_stored(stored);
                Task::none()
            }
            Message::PrefStored(Ok(())) => Task::none(),
            Message::PrefStored(Err(err)) => {
                // Logged only; the in-memory value stands.
                warn!(error = %err, "failed to persist preference");
                Task::none()
            }
        }
    }

    /// Launch a fire-and-forget preference write.
    fn store(&self, key: &'static str, value: String) -> Task<Message> {
        match &self.prefs_path {
            Some(path) => Task::perform(
                prefs::store_value(path.clone(), key, value),
                Message::PrefStored,
            ),
            None => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let title = text("Icon Checker").size(24.0).font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

        let fields = row![
            text_input("Display name", &self.profile.display_name)
                .on_input(Message::DisplayNameChanged)
                .padding(8),
            text_input("Username", &self.profile.handle)
                .on_input(Message::HandleChanged)
                .padding(8),
        ]
        .spacing(8);

        let mut content = column![title, fields].spacing(12).padding(16);

        if self.gallery.is_empty() {
            content = content.push(
                container(ui::empty::view())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(Alignment::Center),
            );
        } else {
            let add_controls = row![
                button("Add image")
                    .padding([6.0, 12.0])
                    .style(button::secondary)
                    .on_press(Message::PickImage),
                button("Add several…")
                    .padding([6.0, 12.0])
                    .style(button::secondary)
                    .on_press(Message::PickImages),
            ]
            .spacing(8);

            content = content
                .push(add_controls)
                .push(ui::strip::view(&self.gallery))
                .push(ui::tabs::view(&preview::LABELS, self.pager.active()))
                .push(self.pager_view());
        }

        content = content.push(
            text(&self.status)
                .size(13.0)
                .color(Color::from_rgb8(0x8e, 0x8e, 0x8e)),
        );

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The horizontal preview pager: one fixed-width page per format.
    fn pager_view(&self) -> Element<Message> {
        let avatar = self
            .gallery
            .selected_image()
            .map(|image_ref| image::Handle::from_path(image_ref.path()));

        let mut pages = Row::new();
        for tab in 0..PAGE_COUNT {
            let page: Element<Message> = match preview::resolve(tab) {
                Some(descriptor) => preview::view(&descriptor, avatar.as_ref(), &self.profile),
                None => column![].into(),
            };
            pages = pages.push(container(page).width(Length::Fixed(PAGE_WIDTH)));
        }

        scrollable(pages)
            .id(pager_id())
            .direction(Direction::Horizontal(
                Scrollbar::new().width(2).scroller_width(2),
            ))
            .on_scroll(|viewport: Viewport| Message::PreviewScrolled(viewport.absolute_offset().x))
            .width(Length::Fixed(PAGE_WIDTH))
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Feed a picker outcome into the gallery.
///
/// Cancellation (and an empty result) is a strict no-op: the collection and
/// its selection are left untouched and no status is reported. Returns the
/// status text for anything that was actually added.
fn apply_pick(gallery: &mut Gallery, outcome: PickOutcome) -> Option<String> {
    match outcome {
        PickOutcome::Cancelled => None,
        PickOutcome::Picked(images) => {
            if images.is_empty() {
                return None;
            }
            let count = images.len();
            gallery.add_many(images);
            if count == 1 {
                Some(String::from("Added 1 image."))
            } else {
                Some(format!("Added {count} images."))
            }
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("icon_checker=info")),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Icon Checker", IconChecker::update, IconChecker::view)
        .theme(IconChecker::theme)
        .window_size(Size::new(480.0, 900.0))
        .centered()
        .run_with(IconChecker::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::ImageRef;
    use std::path::PathBuf;

    fn img(name: &str) -> ImageRef {
        ImageRef::new(PathBuf::from(name))
    }

    #[test]
    fn cancelled_pick_changes_nothing() {
        let mut gallery = Gallery::new();
        gallery.add_many(vec![img("a.png"), img("b.png")]);
        gallery.select(0);
        let before: Vec<_> = gallery.iter().cloned().collect();

        let status = apply_pick(&mut gallery, PickOutcome::Cancelled);

        assert_eq!(status, None);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.selected_index(), 0);
        let after: Vec<_> = gallery.iter().cloned().collect();
        assert_eq!(after, before);
    }

    #[test]
    fn empty_pick_result_changes_nothing() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));

        let status = apply_pick(&mut gallery, PickOutcome::Picked(Vec::new()));

        assert_eq!(status, None);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn single_pick_is_added_and_selected() {
        let mut gallery = Gallery::new();

        let status = apply_pick(&mut gallery, PickOutcome::Picked(vec![img("a.png")]));

        assert_eq!(status.as_deref(), Some("Added 1 image."));
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn batch_pick_selects_first_of_batch() {
        let mut gallery = Gallery::new();
        gallery.add(img("a.png"));

        let status = apply_pick(
            &mut gallery,
            PickOutcome::Picked(vec![img("x.png"), img("y.png")]),
        );

        assert_eq!(status.as_deref(), Some("Added 2 images."));
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.selected_index(), 1);
    }
}
