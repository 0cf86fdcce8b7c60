pub mod json_writer;
pub mod text_report;

pub use json_writer::JsonWriter;
pub use text_report::TextReport;
