pub mod formatter;

pub use formatter::{
    format_footer, format_instrument_list, format_report, format_result, format_score_table,
    format_signature_table, format_verdict, score_bar, should_use_colors,
};
