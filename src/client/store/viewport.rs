use crate::client::config::ViewportClass;

/// Last measured viewport width, shared with the component tree.
///
/// `width` stays `None` until the first measurement arrives so ad slots are not mounted for a
/// guessed viewport and torn down again.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportState {
    pub width: Option<u32>,
}

impl ViewportState {
    pub fn class(&self) -> Option<ViewportClass> {
        self.width.map(ViewportClass::from_width)
    }
}
