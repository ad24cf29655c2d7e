//! Page geometry: panel placement, page-in-view math and the indicator model.

use smallvec::SmallVec;

use crate::px::Px;

/// Natural reading direction of the paged content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingDirection {
    /// Content starts at scroll offset zero.
    #[default]
    LeftToRight,
    /// Content starts scrolled to the end.
    RightToLeft,
}

/// How scroll offsets map onto page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMapping {
    /// Offsets grow from zero towards the last page.
    #[default]
    Natural,
    /// Offsets are zero or negative; page indices are zero or negative too.
    Mirrored,
}

impl ScrollMapping {
    /// Detects the mapping from the offset observed right after first layout.
    ///
    /// A right-to-left surface normally starts scrolled to the end. If it
    /// instead reports exactly zero, the platform flips the scroll axis.
    pub fn detect(direction: ReadingDirection, initial_offset: Px) -> Self {
        match direction {
            ReadingDirection::RightToLeft if initial_offset == Px::ZERO => Self::Mirrored,
            _ => Self::Natural,
        }
    }

    /// Returns `true` for [`ScrollMapping::Mirrored`].
    pub fn is_mirrored(self) -> bool {
        self == Self::Mirrored
    }
}

/// Index of the page nearest to `offset`.
///
/// Natural mapping uses `round(offset / page_width)`; mirrored mapping, and any
/// negative offset, uses `-round(|offset| / page_width)`. A non-positive page
/// width yields page zero.
pub fn page_in_view(offset: Px, page_width: Px, mapping: ScrollMapping) -> i32 {
    if page_width <= Px::ZERO {
        return 0;
    }
    let ratio = offset.to_f32() / page_width.to_f32();
    if mapping.is_mirrored() || offset < Px::ZERO {
        -(ratio.abs().round() as i32)
    } else {
        ratio.round() as i32
    }
}

/// Scroll offset at which `page` is fully in view.
pub fn page_offset(page: i32, page_width: Px) -> Px {
    Px(page.saturating_mul(page_width.raw()))
}

/// Whether a page left of `page` exists.
pub fn can_slide_left(page: i32, panel_count: usize) -> bool {
    panel_count > 1 && page > 0
}

/// Whether a page right of `page` exists.
pub fn can_slide_right(page: i32, panel_count: usize) -> bool {
    (page as i64) < panel_count as i64 - 1
}

/// Clamps `page` to the pages that exist for `panel_count` panels.
///
/// Natural pages run `0..=n-1`, mirrored pages `-(n-1)..=0`.
pub fn clamp_page(page: i32, panel_count: usize, mapping: ScrollMapping) -> i32 {
    let last = i32::try_from(panel_count.saturating_sub(1)).unwrap_or(i32::MAX);
    if mapping.is_mirrored() {
        page.clamp(-last, 0)
    } else {
        page.clamp(0, last)
    }
}

/// Horizontal placement of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelFrame {
    /// Offset of the panel's left edge inside the scrolled content.
    pub left: Px,
    /// Panel width, equal to the viewport width.
    pub width: Px,
}

/// Placement of every panel plus the total scrollable width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelLayout {
    /// One frame per panel, in panel order.
    pub frames: SmallVec<[PanelFrame; 8]>,
    /// Width of the scrolled content holding all panels side by side.
    pub content_width: Px,
}

impl PanelLayout {
    /// Lays `panel_count` panels side by side, each `viewport_width` wide.
    pub fn compute(panel_count: usize, viewport_width: Px) -> Self {
        let frames: SmallVec<[PanelFrame; 8]> = (0..panel_count)
            .map(|index| PanelFrame {
                left: page_offset(index as i32, viewport_width),
                width: viewport_width,
            })
            .collect();
        let content_width = page_offset(panel_count as i32, viewport_width);
        Self {
            frames,
            content_width,
        }
    }
}

/// What the page-count indicator should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    /// Number of dots.
    pub page_count: usize,
    /// Committed page index, remapped for mirrored surfaces.
    pub current_index: i32,
    /// Dot to highlight, counted from the left. `None` if out of range.
    pub active_dot: Option<usize>,
}

impl IndicatorState {
    /// Builds the indicator model for `current_page` out of `page_count`.
    pub fn new(page_count: usize, current_page: i32, mapping: ScrollMapping) -> Self {
        let count = page_count as i32;
        let current_index = if current_page < 0 || mapping.is_mirrored() {
            count + current_page - 1
        } else {
            current_page
        };
        let dot = count - 1 - current_index;
        let active_dot = (0..count).contains(&dot).then_some(dot as usize);
        Self {
            page_count,
            current_index,
            active_dot,
        }
    }
}
