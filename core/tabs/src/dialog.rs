//! FILENAME: core/tabs/src/dialog.rs
//! PURPOSE: Modal interactions expressed as plain calls returning `Option`.
//! CONTEXT: `None` always means the user cancelled.

use recents::RecentEntry;
use serde::{Deserialize, Serialize};

/// What the add-tab dialog hands back on OK. `address` is not normalized yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTabRequest {
    pub name: String,
    pub address: String,
}

impl NewTabRequest {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// The two dialogs the controller needs from the host toolkit.
pub trait TabDialogs {
    /// Show the add-tab chooser for `recents`.
    fn prompt_new_tab(&mut self, recents: &[RecentEntry]) -> Option<NewTabRequest>;

    /// Show a single-choice list, returning the picked index.
    fn pick_recent(&mut self, labels: &[String]) -> Option<usize>;
}

/// Field state of the add-tab dialog: an editable combo listing the recents,
/// plus free-text name and address fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddTabForm {
    pub combo_text: String,
    pub name: String,
    pub address: String,
}

impl AddTabForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picking a recent fills both fields from it.
    pub fn select_recent(&mut self, recents: &[RecentEntry], index: usize) {
        if let Some(entry) = recents.get(index) {
            self.combo_text = entry.label();
            self.name = entry.name.clone();
            self.address = entry.url.clone();
        }
    }

    /// Typing into the combo clears both fields.
    pub fn edit_combo_text(&mut self, text: impl Into<String>) {
        self.combo_text = text.into();
        self.name.clear();
        self.address.clear();
    }

    /// Trimmed name and address; an empty address falls back to the combo text.
    pub fn resolve(&self) -> NewTabRequest {
        let name = self.name.trim();
        let mut address = self.address.trim();
        if address.is_empty() {
            address = self.combo_text.trim();
        }
        NewTabRequest::new(name, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recents() -> Vec<RecentEntry> {
        vec![
            RecentEntry::new("Router", "http://192.168.1.1"),
            RecentEntry::new("NAS", "http://100.64.0.7:5000"),
        ]
    }

    #[test]
    fn test_select_recent_fills_fields() {
        let mut form = AddTabForm::new();
        form.select_recent(&recents(), 1);
        assert_eq!(form.resolve(), NewTabRequest::new("NAS", "http://100.64.0.7:5000"));
        assert_eq!(form.combo_text, "NAS (http://100.64.0.7:5000)");
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut form = AddTabForm::new();
        form.name = "kept".into();
        form.select_recent(&recents(), 5);
        assert_eq!(form.name, "kept");
    }

    #[test]
    fn test_editing_combo_clears_fields() {
        let mut form = AddTabForm::new();
        form.select_recent(&recents(), 0);
        form.edit_combo_text("  100.64.0.5:8080 ");
        assert_eq!(form.name, "");
        assert_eq!(form.address, "");
        assert_eq!(form.resolve(), NewTabRequest::new("", "100.64.0.5:8080"));
    }

    #[test]
    fn test_address_field_wins_over_combo() {
        let form = AddTabForm {
            combo_text: "ignored".into(),
            name: "  Pi ".into(),
            address: " pi.local ".into(),
        };
        assert_eq!(form.resolve(), NewTabRequest::new("Pi", "pi.local"));
    }

    #[test]
    fn test_all_blank_resolves_empty() {
        let form = AddTabForm {
            combo_text: "   ".into(),
            name: "x".into(),
            address: "".into(),
        };
        assert_eq!(form.resolve().address, "");
    }
}
