//! Placement of an image inside a frame.
//!
//! Offsets are rounded half-up (toward positive infinity on `.5`).

/// Position and size of the image relative to the frame's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn ratios(image_w: u32, image_h: u32, box_w: u32, box_h: u32) -> Option<(f64, f64)> {
    if image_w == 0 || image_h == 0 || box_w == 0 || box_h == 0 {
        return None;
    }
    Some((
        f64::from(image_w) / f64::from(image_h),
        f64::from(box_w) / f64::from(box_h),
    ))
}

/// Scale the image to fit entirely inside the box and center it.
///
/// The scaled side is left unrounded; the centering offset is rounded.
/// Returns `None` if any dimension is zero.
pub fn contain_layout(image_w: u32, image_h: u32, box_w: u32, box_h: u32) -> Option<Layout> {
    let (image_ratio, box_ratio) = ratios(image_w, image_h, box_w, box_h)?;
    let (box_w, box_h) = (f64::from(box_w), f64::from(box_h));
    let layout = if image_ratio < box_ratio {
        let w = box_h * image_ratio;
        Layout {
            x: round_half_up(box_w / 2.0 - w / 2.0),
            y: 0.0,
            w,
            h: box_h,
        }
    } else {
        let h = box_w / image_ratio;
        Layout {
            x: 0.0,
            y: round_half_up(box_h / 2.0 - h / 2.0),
            w: box_w,
            h,
        }
    };
    Some(layout)
}

/// Scale the image to cover the whole box and center it; overflow is negative offset.
///
/// Returns `None` if any dimension is zero.
pub fn cover_layout(image_w: u32, image_h: u32, box_w: u32, box_h: u32) -> Option<Layout> {
    let (image_ratio, box_ratio) = ratios(image_w, image_h, box_w, box_h)?;
    let (box_w, box_h) = (f64::from(box_w), f64::from(box_h));
    let layout = if image_ratio < box_ratio {
        let h = round_half_up(box_w / image_ratio);
        Layout {
            x: 0.0,
            y: round_half_up(box_h / 2.0 - h / 2.0),
            w: box_w,
            h,
        }
    } else {
        let w = round_half_up(box_h * image_ratio);
        Layout {
            x: round_half_up(box_w / 2.0 - w / 2.0),
            y: 0.0,
            w,
            h: box_h,
        }
    };
    Some(layout)
}

#[cfg(test)]
mod tests;
