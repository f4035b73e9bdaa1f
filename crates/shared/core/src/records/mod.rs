mod history;
mod quantization;
mod raw_row;
mod summary;

pub use history::HistoryRecord;
pub use quantization::QuantizationResult;
pub use raw_row::RawTradeRow;
pub use summary::HeaderSummary;
