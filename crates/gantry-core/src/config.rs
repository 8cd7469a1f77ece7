use web_time::Duration;

/// Tunables for a [`crate::Ui`]. Plain data; override with the `with_*` setters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UiConfig {
    /// Draw-order distance between consecutive modal dialogs.
    pub dialog_band_size: i32,
    /// Added to every dialog band so dialogs sit above ordinary controls.
    pub dialog_base_offset: i32,
    /// While a dialog is open only its subtree updates and receives input.
    pub modal_gating: bool,
    /// Two clicks on the same control closer than this are a double click.
    pub double_click_time: Duration,
    /// Pointer travel (px) with the left button held before a drag starts.
    pub drag_threshold: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dialog_band_size: 100,
            dialog_base_offset: 1000,
            modal_gating: true,
            double_click_time: Duration::from_millis(400),
            drag_threshold: 3.0,
        }
    }
}

impl UiConfig {
    pub fn with_dialog_bands(mut self, band_size: i32, base_offset: i32) -> Self {
        self.dialog_band_size = band_size;
        self.dialog_base_offset = base_offset;
        self
    }

    pub fn with_modal_gating(mut self, on: bool) -> Self {
        self.modal_gating = on;
        self
    }

    pub fn with_double_click_time(mut self, time: Duration) -> Self {
        self.double_click_time = time;
        self
    }

    pub fn with_drag_threshold(mut self, px: f32) -> Self {
        self.drag_threshold = px;
        self
    }

    /// Draw order for a dialog opened while `open_dialogs` others are open.
    pub fn dialog_draw_order(&self, open_dialogs: usize) -> i32 {
        (open_dialogs as i32 + 1) * self.dialog_band_size + self.dialog_base_offset
    }
}
