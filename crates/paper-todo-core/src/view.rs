//! View and export settings
//!
//! Which list is visible, page orientation, row rendering mode and the
//! export busy flag.

use crate::config::ExportConfig;
use crate::store::ListKind;

/// A4 page size in millimetres, portrait
pub const A4_MM: (f64, f64) = (210.0, 297.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Active,
    Completed,
}

impl View {
    pub fn list(&self) -> ListKind {
        match self {
            View::Active => ListKind::Active,
            View::Completed => ListKind::Completed,
        }
    }

    /// Page title, also used as the export file stem
    pub fn title(&self) -> &'static str {
        match self {
            View::Active => "待办事项",
            View::Completed => "已完成事项",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn toggled(&self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// CSS class of the page element
    pub fn class(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Orientation code understood by jsPDF
    pub fn pdf_code(&self) -> &'static str {
        match self {
            Orientation::Portrait => "p",
            Orientation::Landscape => "l",
        }
    }

    /// On-screen page width
    pub fn page_width_mm(&self, config: &ExportConfig) -> u32 {
        match self {
            Orientation::Portrait => config.portrait_width_mm,
            Orientation::Landscape => config.landscape_width_mm,
        }
    }

    /// Physical A4 page `(width, height)` in this orientation
    pub fn a4_mm(&self) -> (f64, f64) {
        match self {
            Orientation::Portrait => A4_MM,
            Orientation::Landscape => (A4_MM.1, A4_MM.0),
        }
    }
}

/// The two view toggles; they are independent of each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub view: View,
    pub orientation: Orientation,
}

/// How a list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Editable,
    /// Static snapshot for image/PDF export
    Export,
}

impl RowMode {
    pub fn shows_drag_handle(&self) -> bool {
        *self == RowMode::Editable
    }

    pub fn shows_delete(&self) -> bool {
        *self == RowMode::Editable
    }

    /// Priority and date controls accept input
    pub fn controls_enabled(&self) -> bool {
        *self == RowMode::Editable
    }

    pub fn text_editable(&self) -> bool {
        *self == RowMode::Editable
    }

    /// Blank entry rows follow the items only in the editable active list
    pub fn has_blank_rows(&self, list: ListKind) -> bool {
        *self == RowMode::Editable && list == ListKind::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Png,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
        }
    }

    pub fn file_name(&self, view: View) -> String {
        format!("{}.{}", view.title(), self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    /// A snapshot is being rasterized; mutations are refused
    Busy(ExportFormat),
}

impl ExportStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, ExportStatus::Busy(_))
    }
}

/// Image size on the page when scaled to the full page width, keeping the
/// canvas aspect ratio. Returns `(width_mm, height_mm)`.
pub fn fit_to_page_width(canvas_width: f64, canvas_height: f64, page_width_mm: f64) -> (f64, f64) {
    if canvas_width <= 0.0 {
        return (page_width_mm, 0.0);
    }
    (page_width_mm, canvas_height * page_width_mm / canvas_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_toggle_and_widths() {
        let config = ExportConfig::default();
        let o = Orientation::default();
        assert_eq!(o.page_width_mm(&config), 210);
        assert_eq!(o.toggled().page_width_mm(&config), 297);
        assert_eq!(o.toggled().toggled(), o);
        assert_eq!(Orientation::Landscape.a4_mm(), (297.0, 210.0));
        assert_eq!(Orientation::Landscape.pdf_code(), "l");
    }

    #[test]
    fn test_export_mode_strips_controls() {
        assert!(RowMode::Editable.shows_drag_handle());
        assert!(!RowMode::Export.shows_drag_handle());
        assert!(!RowMode::Export.shows_delete());
        assert!(!RowMode::Export.controls_enabled());
        assert!(!RowMode::Export.text_editable());
    }

    #[test]
    fn test_blank_rows_only_in_editable_active() {
        assert!(RowMode::Editable.has_blank_rows(ListKind::Active));
        assert!(!RowMode::Editable.has_blank_rows(ListKind::Completed));
        assert!(!RowMode::Export.has_blank_rows(ListKind::Active));
        assert!(RowMode::Editable.has_blank_rows(View::Active.list()));
        assert_eq!(View::Completed.list(), ListKind::Completed);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Pdf.file_name(View::Active), "待办事项.pdf");
        assert_eq!(ExportFormat::Png.file_name(View::Completed), "已完成事项.png");
    }

    #[test]
    fn test_fit_to_page_width() {
        assert_eq!(fit_to_page_width(1000.0, 500.0, 210.0), (210.0, 105.0));
        assert_eq!(fit_to_page_width(0.0, 500.0, 210.0), (210.0, 0.0));
    }
}
