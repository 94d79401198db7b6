pub mod confirm_dialog;
pub mod error_banner;
pub mod field_row;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod table_totals_row;

pub use confirm_dialog::ConfirmDialog;
pub use error_banner::ErrorBanner;
pub use field_row::FieldRow;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use table_totals_row::TableTotalsRow;
