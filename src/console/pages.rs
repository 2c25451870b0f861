//! Headless list-page controllers
//!
//! The list-state contract every view follows:
//! - a failed load leaves the list empty and sets the page error;
//! - a row disappears only after its DELETE resolves; a failed delete
//!   leaves the list unchanged and sets the page error;
//! - an empty list shows the view's placeholder text.

use crate::models::{CreateHardware, Hardware, HardwareType};
use crate::AppResult;

/// Shared list-page state: items, page-level error, empty placeholder.
#[derive(Debug)]
pub struct ListPage<T> {
    items: Vec<T>,
    error: Option<String>,
    empty_message: &'static str,
}

impl<T> ListPage<T> {
    pub fn new(empty_message: &'static str) -> Self {
        Self {
            items: Vec::new(),
            error: None,
            empty_message,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Placeholder text, shown only when the list is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(self.empty_message)
    }

    /// Absorb a fetch result. Failure empties the list and surfaces the
    /// error at page level.
    pub fn finish_load(&mut self, result: AppResult<Vec<T>>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items = Vec::new();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Absorb a delete result for the row matched by `matches`. The row is
    /// removed only on success; failure keeps the list as rendered and
    /// surfaces the error. Returns whether the row was removed.
    pub fn finish_delete(
        &mut self,
        result: AppResult<()>,
        matches: impl Fn(&T) -> bool,
    ) -> bool {
        match result {
            Ok(()) => {
                self.items.retain(|item| !matches(item));
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

/// Descriptor for one hardware category view. The four category pages are
/// this struct with different constants, not separate page modules.
#[derive(Debug, Clone, Copy)]
pub struct HardwareView {
    pub title: &'static str,
    pub empty_message: &'static str,
    /// `None` lists every record regardless of type
    pub type_filter: Option<HardwareType>,
}

impl HardwareView {
    pub const ALL: HardwareView = HardwareView {
        title: "Hardware",
        empty_message: "No hardware found.",
        type_filter: None,
    };
    pub const COMPUTERS: HardwareView = HardwareView {
        title: "Computers",
        empty_message: "No computers found.",
        type_filter: Some(HardwareType::Computer),
    };
    pub const AUDIO_VIDEO: HardwareView = HardwareView {
        title: "Audio/Video Equipment",
        empty_message: "No audio/video equipment found.",
        type_filter: Some(HardwareType::AudioVideo),
    };
    pub const VIDEO: HardwareView = HardwareView {
        title: "Video Equipment",
        empty_message: "No video equipment found.",
        type_filter: Some(HardwareType::Video),
    };
    pub const DEVICES: HardwareView = HardwareView {
        title: "Devices",
        empty_message: "No devices found.",
        type_filter: Some(HardwareType::Device),
    };

    /// Look up the view for a type code
    pub fn for_type(hardware_type: Option<HardwareType>) -> HardwareView {
        match hardware_type {
            None => Self::ALL,
            Some(HardwareType::Computer) => Self::COMPUTERS,
            Some(HardwareType::AudioVideo) => Self::AUDIO_VIDEO,
            Some(HardwareType::Video) => Self::VIDEO,
            // Printers never got their own page; they land in the
            // generic device view.
            Some(HardwareType::Printer) | Some(HardwareType::Device) => Self::DEVICES,
        }
    }

    /// Restrict a fetched collection to this view
    pub fn filter(&self, items: Vec<Hardware>) -> Vec<Hardware> {
        match self.type_filter {
            None => items,
            Some(t) => items
                .into_iter()
                .filter(|item| item.hardware_type == Some(t))
                .collect(),
        }
    }

    /// Blank add form pre-set so new items land back in this view
    pub fn add_defaults(&self) -> CreateHardware {
        match self.type_filter {
            Some(t) => CreateHardware::for_type(t),
            None => CreateHardware {
                name: String::new(),
                model: String::new(),
                serial_number: String::new(),
                description: String::new(),
                hardware_type: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn failed_load_empties_the_list_and_sets_the_error() {
        let mut page: ListPage<i64> = ListPage::new("No items found.");
        page.finish_load(Ok(vec![1, 2, 3]));
        assert_eq!(page.items(), &[1, 2, 3]);
        assert_eq!(page.placeholder(), None);

        page.finish_load(Err(AppError::Api("Failed to fetch hardware".into())));
        assert!(page.items().is_empty());
        assert_eq!(page.error(), Some("Failed to fetch hardware"));
        assert_eq!(page.placeholder(), Some("No items found."));
    }

    #[test]
    fn rows_leave_the_list_only_after_a_successful_delete() {
        let mut page: ListPage<i64> = ListPage::new("No items found.");
        page.finish_load(Ok(vec![1, 2, 3]));

        let removed = page.finish_delete(Err(AppError::Api("Failed to delete".into())), |i| *i == 2);
        assert!(!removed);
        assert_eq!(page.items(), &[1, 2, 3]);
        assert_eq!(page.error(), Some("Failed to delete"));

        let removed = page.finish_delete(Ok(()), |i| *i == 2);
        assert!(removed);
        assert_eq!(page.items(), &[1, 3]);
        assert_eq!(page.error(), None);
    }

    #[test]
    fn views_split_hardware_by_type() {
        let items: Vec<Hardware> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "ThinkPad", "model": "T14", "type": "computer"},
                {"id": 2, "name": "Projector", "model": "EB-X06", "type": "video"},
                {"id": 3, "name": "Headset", "model": "H390"}
            ]"#,
        )
        .unwrap();

        assert_eq!(HardwareView::ALL.filter(items.clone()).len(), 3);
        let computers = HardwareView::COMPUTERS.filter(items.clone());
        assert_eq!(computers.len(), 1);
        assert_eq!(computers[0].name, "ThinkPad");
        // Untyped legacy rows match no category view
        assert!(HardwareView::DEVICES.filter(items).is_empty());
    }

    #[test]
    fn add_defaults_carry_the_view_type() {
        let defaults = HardwareView::COMPUTERS.add_defaults();
        assert_eq!(defaults.hardware_type, Some(HardwareType::Computer));
        assert_eq!(HardwareView::ALL.add_defaults().hardware_type, None);
    }
}
