//! Preview dispatcher and renderer
//!
//! Each preview format is described by data (a [`FormatDescriptor`]) rather
//! than its own view tree: sections of generic blocks with slots for the
//! avatar and the profile text fields, plus static sample content. One
//! renderer walks the descriptor and substitutes the picked image into every
//! avatar slot and the profile fields into the name/handle slots. Anything
//! else (counts, captions, timestamps) is fixed sample data.

mod formats;

use iced::font::Weight;
use iced::widget::{column, container, horizontal_space, image, text, Column, Row};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Theme};

use crate::state::profile::Profile;
use crate::Message;

/// Tab labels, in page order.
pub const LABELS: [&str; 3] = ["Instagram", "X", "LINE"];

/// Look up the format for a tab index.
///
/// Unknown indices yield `None` and the caller renders nothing; an
/// out-of-range tab is not an error.
pub fn resolve(tab: usize) -> Option<FormatDescriptor> {
    match tab {
        0 => Some(formats::instagram()),
        1 => Some(formats::x()),
        2 => Some(formats::line()),
        _ => None,
    }
}

/// A complete preview format: label, accent color, and the sections that
/// make up its mock layout.
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    pub label: &'static str,
    pub accent: Color,
    pub sections: Vec<Section>,
}

/// A titled card within a format (e.g. "Stories", "Chat room").
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    /// Background of the section body; `None` renders on white.
    pub fill: Option<Color>,
    pub blocks: Vec<Block>,
}

/// Where a text slot takes its content from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSlot {
    DisplayName,
    Handle,
    /// The handle with a leading `@`.
    AtHandle,
    Static(&'static str),
}

impl TextSlot {
    /// Substitute the profile fields into the slot.
    pub fn resolve(&self, profile: &Profile) -> String {
        match self {
            TextSlot::DisplayName => profile.display_name.clone(),
            TextSlot::Handle => profile.handle.clone(),
            TextSlot::AtHandle => format!("@{}", profile.handle),
            TextSlot::Static(content) => (*content).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Bold,
    Muted,
}

/// One run of text inside a block.
#[derive(Debug, Clone)]
pub struct LineSpec {
    pub slot: TextSlot,
    pub tone: Tone,
    pub size: f32,
}

impl LineSpec {
    pub fn plain(slot: TextSlot, size: f32) -> Self {
        Self { slot, tone: Tone::Plain, size }
    }

    pub fn bold(slot: TextSlot, size: f32) -> Self {
        Self { slot, tone: Tone::Bold, size }
    }

    pub fn muted(slot: TextSlot, size: f32) -> Self {
        Self { slot, tone: Tone::Muted, size }
    }
}

/// What an avatar slot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarContent {
    /// The picked image (or the initial-letter placeholder when none has
    /// been picked yet).
    UserImage,
    /// A fixed placeholder with the given letter, used for sample contacts
    /// shown next to the user's own entry for comparison.
    Placeholder(&'static str),
}

#[derive(Debug, Clone)]
pub struct AvatarSpec {
    pub size: f32,
    pub content: AvatarContent,
    /// Ring drawn around the avatar (the story ring).
    pub ring: Option<Color>,
}

impl AvatarSpec {
    pub fn user(size: f32) -> Self {
        Self { size, content: AvatarContent::UserImage, ring: None }
    }

    pub fn ringed(size: f32, ring: Color) -> Self {
        Self { size, content: AvatarContent::UserImage, ring: Some(ring) }
    }

    pub fn placeholder(size: f32, letter: &'static str) -> Self {
        Self { size, content: AvatarContent::Placeholder(letter), ring: None }
    }
}

/// The building blocks a format is assembled from.
#[derive(Debug, Clone)]
pub enum Block {
    /// Avatar on the left, stacked text rows beside it, optional trailing
    /// run and unread badge (chat-list rows, post headers, timeline posts).
    AvatarRow {
        avatar: AvatarSpec,
        rows: Vec<Vec<LineSpec>>,
        trailing: Option<LineSpec>,
        badge: Option<&'static str>,
    },
    /// Centered avatar with lines underneath (stories, profile cards).
    AvatarColumn {
        avatar: AvatarSpec,
        lines: Vec<LineSpec>,
    },
    /// Full-width colored rectangle (cover photo, sample post image).
    Banner { height: f32, color: Color },
    /// A single inline row of text runs (captions, like counts, stats).
    TextRow(Vec<LineSpec>),
    /// Icons with optional counts (post/tweet action bars).
    IconRow(Vec<(&'static str, Option<&'static str>)>),
    /// A chat bubble; `mine` bubbles use the format accent and align right.
    Bubble {
        mine: bool,
        avatar: bool,
        text: &'static str,
        time: Option<&'static str>,
    },
    /// Centered pill (date separators).
    Pill(&'static str),
}

// Palette shared by the renderer.
fn muted_color() -> Color {
    Color::from_rgb8(0x8e, 0x8e, 0x8e)
}

fn card_border() -> Border {
    Border {
        color: Color::from_rgb8(0xe5, 0xe5, 0xe5),
        width: 1.0,
        radius: 8.0.into(),
    }
}

fn bold_font() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Render a whole format page for the given avatar image and profile.
pub fn view(
    descriptor: &FormatDescriptor,
    avatar: Option<&image::Handle>,
    profile: &Profile,
) -> Element<'static, Message> {
    let mut page = Column::new().spacing(16).padding(12);
    for section in &descriptor.sections {
        page = page.push(section_view(section, descriptor.accent, avatar, profile));
    }
    container(page).width(Length::Fill).into()
}

fn section_view(
    section: &Section,
    accent: Color,
    avatar: Option<&image::Handle>,
    profile: &Profile,
) -> Element<'static, Message> {
    let title = text(section.title.to_uppercase())
        .size(12.0)
        .font(bold_font())
        .color(muted_color());

    let mut body = Column::new().spacing(10);
    for block in &section.blocks {
        body = body.push(block_view(block, accent, avatar, profile));
    }

    let fill = section.fill;
    let card = container(body)
        .width(Length::Fill)
        .padding(12)
        .style(move |_theme: &Theme| container::Style {
            background: fill.map(Background::Color),
            border: card_border(),
            ..container::Style::default()
        });

    column![title, card].spacing(6).into()
}

fn block_view(
    block: &Block,
    accent: Color,
    avatar: Option<&image::Handle>,
    profile: &Profile,
) -> Element<'static, Message> {
    match block {
        Block::AvatarRow { avatar: spec, rows, trailing, badge } => {
            let mut lines = Column::new().spacing(2);
            for runs in rows {
                lines = lines.push(runs_view(runs, profile));
            }

            let mut content = Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(avatar_view(spec, avatar, profile))
                .push(lines)
                .push(horizontal_space());

            if let Some(run) = trailing {
                content = content.push(run_view(run, profile));
            }
            if let Some(label) = badge {
                content = content.push(badge_view(*label, accent));
            }
            content.into()
        }
        Block::AvatarColumn { avatar: spec, lines } => {
            let mut content = Column::new()
                .spacing(4)
                .align_x(Alignment::Center)
                .push(avatar_view(spec, avatar, profile));
            for run in lines {
                content = content.push(run_view(run, profile));
            }
            container(content)
                .width(Length::Fill)
                .align_x(Alignment::Center)
                .into()
        }
        Block::Banner { height, color } => {
            let color = *color;
            container(text(""))
                .width(Length::Fill)
                .height(Length::Fixed(*height))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(color)),
                    border: Border {
                        radius: 4.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                })
                .into()
        }
        Block::TextRow(runs) => runs_view(runs, profile),
        Block::IconRow(items) => {
            let mut content = Row::new().spacing(18).align_y(Alignment::Center);
            for (icon, count) in items {
                let mut item = Row::new()
                    .spacing(4)
                    .align_y(Alignment::Center)
                    .push(text(*icon).size(16.0));
                if let Some(count) = count {
                    item = item.push(text(*count).size(13.0).color(muted_color()));
                }
                content = content.push(item);
            }
            content.into()
        }
        Block::Bubble { mine, avatar: with_avatar, text: content, time } => {
            bubble_view(*mine, *with_avatar, *content, *time, accent, avatar, profile)
        }
        Block::Pill(label) => {
            let pill = container(text(*label).size(12.0).color(Color::WHITE))
                .padding([4.0, 12.0])
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(Color::from_rgba8(0, 0, 0, 0.3))),
                    border: Border {
                        radius: 12.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                });
            container(pill)
                .width(Length::Fill)
                .align_x(Alignment::Center)
                .into()
        }
    }
}

fn runs_view(runs: &[LineSpec], profile: &Profile) -> Element<'static, Message> {
    let mut content = Row::new().spacing(4).align_y(Alignment::Center);
    for run in runs {
        content = content.push(run_view(run, profile));
    }
    content.into()
}

fn run_view(run: &LineSpec, profile: &Profile) -> Element<'static, Message> {
    let mut widget = text(run.slot.resolve(profile)).size(run.size);
    match run.tone {
        Tone::Plain => {}
        Tone::Bold => widget = widget.font(bold_font()),
        Tone::Muted => widget = widget.color(muted_color()),
    }
    widget.into()
}

fn badge_view(label: &'static str, accent: Color) -> Element<'static, Message> {
    container(text(label).size(12.0).color(Color::WHITE).font(bold_font()))
        .padding([2.0, 7.0])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn bubble_view(
    mine: bool,
    with_avatar: bool,
    content: &'static str,
    time: Option<&'static str>,
    accent: Color,
    avatar: Option<&image::Handle>,
    profile: &Profile,
) -> Element<'static, Message> {
    let (background, text_color) = if mine {
        (accent, Color::WHITE)
    } else {
        (Color::WHITE, Color::BLACK)
    };

    let bubble = container(text(content).size(14.0).color(text_color))
        .padding(10)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let mut line = Row::new().spacing(8).align_y(Alignment::End);
    if mine {
        line = line.push(horizontal_space());
        if let Some(time) = time {
            line = line.push(text(time).size(11.0).color(muted_color()));
        }
        line = line.push(bubble);
    } else {
        if with_avatar {
            line = line.push(avatar_view(&AvatarSpec::user(32.0), avatar, profile));
        }
        line = line.push(bubble);
        if let Some(time) = time {
            line = line.push(text(time).size(11.0).color(muted_color()));
        }
        line = line.push(horizontal_space());
    }
    line.into()
}

fn avatar_view(
    spec: &AvatarSpec,
    handle: Option<&image::Handle>,
    profile: &Profile,
) -> Element<'static, Message> {
    let size = spec.size;
    let radius = size / 2.0;
    let ring = spec.ring;

    let inner: Element<'static, Message> = match (&spec.content, handle) {
        (AvatarContent::UserImage, Some(handle)) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        (AvatarContent::UserImage, None) => letter_avatar(profile.initial(), size),
        (AvatarContent::Placeholder(letter), _) => letter_avatar((*letter).to_string(), size),
    };

    let framed = container(inner).style(move |_theme: &Theme| container::Style {
        border: Border {
            color: ring.unwrap_or(Color::TRANSPARENT),
            width: if ring.is_some() { 2.0 } else { 0.0 },
            radius: radius.into(),
        },
        ..container::Style::default()
    });

    if ring.is_some() {
        framed.padding(3).into()
    } else {
        framed.into()
    }
}

fn letter_avatar(letter: String, size: f32) -> Element<'static, Message> {
    container(
        text(letter)
            .size(size * 0.4)
            .color(Color::WHITE)
            .font(bold_font()),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color::from_rgb8(0xb4, 0xb4, 0xb4))),
        border: Border {
            radius: (size / 2.0).into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::pager::PAGE_COUNT;

    fn profile() -> Profile {
        let mut profile = Profile::new();
        profile.set_display_name("Alice".to_string());
        profile.set_handle("alice_dev".to_string());
        profile
    }

    /// Collect every text slot reachable in a descriptor.
    fn slots(descriptor: &FormatDescriptor) -> Vec<TextSlot> {
        let mut found = Vec::new();
        for section in &descriptor.sections {
            for block in &section.blocks {
                match block {
                    Block::AvatarRow { rows, trailing, .. } => {
                        for runs in rows {
                            found.extend(runs.iter().map(|r| r.slot.clone()));
                        }
                        if let Some(run) = trailing {
                            found.push(run.slot.clone());
                        }
                    }
                    Block::AvatarColumn { lines, .. } => {
                        found.extend(lines.iter().map(|r| r.slot.clone()));
                    }
                    Block::TextRow(runs) => {
                        found.extend(runs.iter().map(|r| r.slot.clone()));
                    }
                    _ => {}
                }
            }
        }
        found
    }

    fn user_avatar_count(descriptor: &FormatDescriptor) -> usize {
        descriptor
            .sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter(|block| match block {
                Block::AvatarRow { avatar, .. } | Block::AvatarColumn { avatar, .. } => {
                    avatar.content == AvatarContent::UserImage
                }
                Block::Bubble { avatar, .. } => *avatar,
                _ => false,
            })
            .count()
    }

    #[test]
    fn resolve_covers_every_tab() {
        for tab in 0..PAGE_COUNT {
            let descriptor = resolve(tab).expect("known tab must resolve");
            assert_eq!(descriptor.label, LABELS[tab]);
        }
    }

    #[test]
    fn resolve_out_of_range_yields_none() {
        assert!(resolve(PAGE_COUNT).is_none());
        assert!(resolve(usize::MAX).is_none());
    }

    #[test]
    fn every_format_substitutes_the_avatar_and_profile() {
        for tab in 0..PAGE_COUNT {
            let descriptor = resolve(tab).unwrap();
            assert!(
                user_avatar_count(&descriptor) > 0,
                "{} must show the picked image",
                descriptor.label
            );

            let slots = slots(&descriptor);
            assert!(
                slots.contains(&TextSlot::DisplayName),
                "{} must show the display name",
                descriptor.label
            );
            assert!(
                slots.iter().any(|s| matches!(s, TextSlot::Handle | TextSlot::AtHandle))
                    || descriptor.label == "LINE",
                "{} must show the handle",
                descriptor.label
            );
        }
    }

    #[test]
    fn slot_resolution_substitutes_profile_fields() {
        let profile = profile();

        assert_eq!(TextSlot::DisplayName.resolve(&profile), "Alice");
        assert_eq!(TextSlot::Handle.resolve(&profile), "alice_dev");
        assert_eq!(TextSlot::AtHandle.resolve(&profile), "@alice_dev");
        assert_eq!(TextSlot::Static("2 HOURS AGO").resolve(&profile), "2 HOURS AGO");
    }
}
