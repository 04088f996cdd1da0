//! Declarative view tree handed to the host widget renderer.
//!
//! The tree is a closed set of node kinds composed by small builder
//! functions, one per visual piece of a row. Nothing here can fail: every
//! present slot renders, absent slots render nothing.

use serde::Serialize;

use crate::assemble;
use crate::config::{Font, WidgetConfig};
use crate::models::{DisplayItem, MediaListEntry};

const ROOT_PADDING: u32 = 5;
const ROW_SPACING: u32 = 3;
const POSTER_WIDTH: u32 = 30;
const POSTER_HEIGHT: u32 = 50;
const POSTER_CORNER: u32 = 2;
const BAR_CORNER: u32 = 3;
const BAR_STACK_HEIGHT: u32 = 4;
const SECONDARY_BAR_HEIGHT: u32 = 2;
const BACKDROP_COLOR: &str = "white";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Children drawn on top of each other.
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edges {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Edges {
    pub const fn all(v: u32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Take all the width the parent offers.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub max_width: bool,
}

impl Frame {
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            max_width: false,
        }
    }

    pub const fn height(height: u32) -> Self {
        Self {
            width: None,
            height: Some(height),
            max_width: false,
        }
    }

    pub const fn max() -> Self {
        Self {
            width: None,
            height: None,
            max_width: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    Fill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Stack {
        axis: Axis,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        padding: Option<Edges>,
        #[serde(skip_serializing_if = "Option::is_none")]
        frame: Option<Frame>,
        children: Vec<Node>,
    },
    Spacer,
    Text {
        content: String,
        font: Font,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    Image {
        url: String,
        frame: Frame,
        mode: ContentMode,
        clip: bool,
        corner: u32,
    },
    Rect {
        frame: Frame,
        color: String,
        corner: u32,
    },
    Link {
        url: String,
        child: Box<Node>,
    },
}

impl Node {
    pub fn stack(axis: Axis, children: Vec<Node>) -> Self {
        Self::Stack {
            axis,
            spacing: None,
            padding: None,
            frame: None,
            children,
        }
    }

    pub fn vstack(children: Vec<Node>) -> Self {
        Self::stack(Axis::Vertical, children)
    }

    pub fn hstack(children: Vec<Node>) -> Self {
        Self::stack(Axis::Horizontal, children)
    }

    pub fn zstack(children: Vec<Node>) -> Self {
        Self::stack(Axis::Depth, children)
    }

    /// Set spacing on a stack; other nodes are returned unchanged.
    pub fn spacing(mut self, value: u32) -> Self {
        if let Self::Stack { spacing, .. } = &mut self {
            *spacing = Some(value);
        }
        self
    }

    pub fn padding(mut self, value: Edges) -> Self {
        if let Self::Stack { padding, .. } = &mut self {
            *padding = Some(value);
        }
        self
    }

    pub fn frame(mut self, value: Frame) -> Self {
        if let Self::Stack { frame, .. } = &mut self {
            *frame = Some(value);
        }
        self
    }

    pub fn text(content: impl Into<String>, font: Font, color: Option<&str>) -> Self {
        Self::Text {
            content: content.into(),
            font,
            color: color.map(str::to_string),
        }
    }

    pub fn link(url: impl Into<String>, child: Node) -> Self {
        Self::Link {
            url: url.into(),
            child: Box::new(child),
        }
    }

    /// Direct children of a stack or link; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Stack { children, .. } => children,
            Self::Link { child, .. } => std::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }
}

/// Root of the widget: one row per present slot, in slot order.
pub fn build(config: &WidgetConfig, items: &[Option<DisplayItem>]) -> Node {
    let rows = items
        .iter()
        .flatten()
        .map(|item| media_row(config, item))
        .collect();

    Node::vstack(rows)
        .padding(Edges::all(ROOT_PADDING))
        .spacing(ROW_SPACING)
}

/// Resolve the accent, assemble the slots and build the tree in one pass.
pub fn render(
    config: &WidgetConfig,
    entries: &[MediaListEntry],
) -> (Vec<Option<DisplayItem>>, Node) {
    let highlight = assemble::highlight_color(entries);
    let items = assemble::assemble(config, entries, highlight);
    let tree = build(config, &items);
    tracing::info!(
        slots = items.len(),
        rendered = items.iter().flatten().count(),
        highlight,
        "built widget tree"
    );
    (items, tree)
}

fn media_row(config: &WidgetConfig, item: &DisplayItem) -> Node {
    let details = Node::vstack(vec![
        left_align(vec![Node::text(&item.title, config.title_font, None)]),
        progress_text(config, item),
        progress(config, item),
    ])
    .spacing(0)
    .frame(Frame::max());

    Node::link(
        &item.link_url,
        Node::hstack(vec![poster(&item.poster_url), details, Node::Spacer]),
    )
}

fn poster(url: &str) -> Node {
    Node::Image {
        url: url.to_string(),
        frame: Frame::fixed(POSTER_WIDTH, POSTER_HEIGHT),
        mode: ContentMode::Fill,
        clip: true,
        corner: POSTER_CORNER,
    }
}

fn left_align(mut children: Vec<Node>) -> Node {
    children.push(Node::Spacer);
    Node::hstack(children).spacing(0).padding(Edges::all(0))
}

fn progress_text(config: &WidgetConfig, item: &DisplayItem) -> Node {
    let color = Some(item.highlight_color.as_str());
    let mut children = vec![
        Node::text(&item.progress_label, config.details_font, color),
        Node::Spacer,
    ];
    if let Some(label) = &item.next_episode_label {
        children.push(Node::text(label, config.details_font, color));
    }
    children.push(Node::Spacer);

    Node::hstack(children).padding(Edges::new(3, 0, 3, 0))
}

fn progress(config: &WidgetConfig, item: &DisplayItem) -> Node {
    let width = config.bar.width;
    let height = config.bar.height;
    let primary_height = if item.secondary_progress.is_some() {
        height.saturating_sub(SECONDARY_BAR_HEIGHT)
    } else {
        height
    };

    let primary = progress_bar(
        item.progress.current,
        item.bar_max,
        width,
        primary_height,
        &item.highlight_color,
    );
    let mut bars = vec![primary];
    if let Some(secondary) = item.secondary_progress {
        bars.push(progress_bar(
            secondary,
            item.bar_max,
            width,
            SECONDARY_BAR_HEIGHT,
            &item.highlight_color,
        ));
    }

    let backdrop = Node::hstack(vec![
        Node::Rect {
            frame: Frame::fixed(width, height),
            color: BACKDROP_COLOR.into(),
            corner: BAR_CORNER,
        },
        Node::Spacer,
    ]);

    Node::zstack(vec![backdrop, Node::vstack(bars).spacing(0)])
        .frame(Frame::height(BAR_STACK_HEIGHT))
}

fn progress_bar(current: u32, max: u32, width: u32, height: u32, color: &str) -> Node {
    Node::hstack(vec![
        Node::Rect {
            frame: Frame::fixed(bar_width(width, current, max), height),
            color: color.to_string(),
            corner: BAR_CORNER,
        },
        Node::Spacer,
    ])
}

/// Share of `full` that `current / max` covers, rounded and kept inside the bar.
pub fn bar_width(full: u32, current: u32, max: u32) -> u32 {
    if max == 0 {
        return full;
    }
    let scaled = (f64::from(full) * f64::from(current) / f64::from(max)).round();
    (scaled as u32).min(full)
}
