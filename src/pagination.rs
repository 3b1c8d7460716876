//! Page math for the review gallery and the results browser
//!
//! The gallery pages through processed images with a viewport-dependent
//! page size and hard boundaries; the results browser shows one record at
//! a time and wraps around at both ends.

/// Viewport width below which the gallery shows one image per page.
pub const NARROW_VIEWPORT_PX: i32 = 600;

/// Page size as a pure function of viewport width: one image on narrow
/// viewports, two otherwise.
pub fn images_per_page(viewport_width: i32) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        1
    } else {
        2
    }
}

/// Total page count, never less than 1 so an empty gallery still renders
/// a single (empty) page indicator.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Clamps the current page into range after a page-size change.
pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.min(total_pages(len, per_page) - 1)
}

pub fn can_go_previous(page: usize) -> bool {
    page > 0
}

pub fn can_go_next(page: usize, len: usize, per_page: usize) -> bool {
    len > 0 && page + 1 < total_pages(len, per_page)
}

/// Next index with wrap-around: past the last element returns the first.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Previous index with wrap-around: before the first element returns the last.
pub fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}
